//! Service layer: one transaction per call, validation then mutation.

pub mod games;
pub mod lookup;
pub mod players;
pub mod reports;

pub use lookup::DbLookup;
