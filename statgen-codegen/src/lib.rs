// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Header enum extraction and Rust enum generation.
//!
//! # Module Organization
//!
//! - [`builder`] - Indented code building ([`CodeBuilder`](builder::CodeBuilder))
//! - [`ast`] - Rust items rendered by the generator
//! - [`extract`] - Line classification, entry parsing and value resolution
//! - [`generator`] - The pipeline tying a [`Manifest`](statgen_manifest::Manifest) to output

pub mod ast;
pub mod builder;
mod error;
pub mod extract;
pub mod generator;

pub use error::{Error, HeaderSource, Result};
pub use generator::{EnumBinding, GeneratedFile, Generator, render_file};
