//! Core utilities and types for the Puddleglum generator.
//!
//! This crate provides the string transforms and file primitives used across
//! the Puddleglum crates.

mod file;
mod utils;

// File operations
pub use file::{GeneratedFile, recreate_dir, write_file};
// String utilities
pub use utils::{to_kebab_case, to_plural, to_snake_case};
