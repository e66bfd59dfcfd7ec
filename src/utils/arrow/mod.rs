//! Arrow data handling utilities
//!
//! Column extraction with type adaptation and schema conformance for
//! record batches read from source files.

pub mod array_utils;

// Re-export commonly used functions for convenience
pub use array_utils::{conform_to_schema, get_column};
