//! High-level operations that correspond to CLI commands
//!
//! These modules contain the core business logic for each bulkren operation,
//! separated from CLI concerns like argument parsing and output formatting.

pub mod rename;

pub use rename::{check_inputs_exist, rename_operation, RenameParams};
