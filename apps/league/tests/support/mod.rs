#![allow(dead_code)]


pub use app_builder::{create_test_app, form_post, CSRF_TEST_TOKEN};
pub use test_state::build_test_state;
