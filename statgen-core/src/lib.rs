//! Core utilities for the statgen enum binding generator.
//!
//! This crate provides the identifier conversions and file handling shared
//! by the manifest, codegen and CLI crates.

mod file;
mod utils;

// File operations
pub use file::{File, Freshness, WriteResult};
// String utilities
pub use utils::{is_c_identifier, is_rust_keyword, to_pascal_case};
