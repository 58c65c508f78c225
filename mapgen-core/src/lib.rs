//! Core utilities and types for the mapgen generator.
//!
//! This crate provides the file writer and the identifier helpers shared
//! by the manifest loader, the pipeline and the Go backend.

mod file;
mod utils;

// File operations
pub use file::{File, WriteResult};
// String utilities
pub use utils::{is_exported, lower_first, receiver_name, upper_first};
