// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! The task table driving statgen.
//!
//! A [`Manifest`] lists the Rust enums to generate and, for each one, the
//! header files and C enums it is assembled from. The built-in table covers
//! the RocksDB and Titan statistics headers; a TOML file can replace it.

mod error;
mod manifest;

pub use error::{Error, Result};
pub use manifest::{
    DEFAULT_SENTINEL_SUFFIX, Manifest, OutputConfig, SourceConfig, TaskConfig,
};
