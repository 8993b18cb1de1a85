//! Common utilities for integration tests

#![allow(dead_code)]

pub mod test_helpers;

// Re-export commonly used items
#[allow(unused_imports)]
pub use test_helpers::{
    exact_sine_mode, fd_solver_on_unit_interval, mean_squared_error, relative_error, UNIT,
};
