//! Unit tests for the table modules
//!
//! Tests are organized by module; shared property checks live next to the
//! module they exercise.

pub mod bex_tests;
pub mod gradient_tests;
pub mod mdct_tests;
pub mod quantization_tests;
pub mod tables_tests;
