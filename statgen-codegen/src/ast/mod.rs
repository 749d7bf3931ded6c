//! Rust items emitted by the generator.

mod enums;

pub use enums::{Enum, Variant};
