//! Core utilities and types for the tsbind generator.
//!
//! This crate provides file writing and the small string helpers shared
//! across the tsbind crates.

mod file;
mod utils;

// File operations
pub use file::{File, Overwrite, WriteResult};
// String utilities
pub use utils::{normalize_newlines, strip_quotes, strip_suffix};
