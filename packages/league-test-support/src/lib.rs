//! Test support shared by the league integration tests: one-time logging
//! initialization and assertions for the problem-details error contract.

pub mod logging;
pub mod problem_details;

pub use problem_details::{assert_problem_details, field_errors, ProblemDetailsLike};
