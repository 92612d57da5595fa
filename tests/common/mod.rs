//! Common utilities for integration tests

#![allow(dead_code)]

pub mod fixtures;
pub mod test_helpers;

// Re-export commonly used items
pub use fixtures::{
    accumulation_parameters,
    desorption_parameters,
    frozen_parameters,
    ExponentialRelaxation,
};
pub use test_helpers::{relative_error, write_trace};
