//! Utility functions

pub mod validation;

pub use validation::{validate_affiliation, validate_contest_id};
