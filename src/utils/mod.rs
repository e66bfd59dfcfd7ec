//! Utility functions for reading, writing and normalizing encounter data

pub mod arrow;
pub mod dates;
pub mod io;
pub mod logging;
pub mod text;

// Re-export commonly used functions for convenience
pub use io::{DEFAULT_BATCH_SIZE, FileFormat};
pub use logging::{log_operation_complete, log_operation_start, log_warning};
