//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The UI handles record every call so tests can assert on the sequence a
//! user would have seen (status texts, disabled/enabled toggles, labels).

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
