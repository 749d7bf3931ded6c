//! Extraction of enum entries from C/C++ headers.
//!
//! A header is scanned line by line with [`LineRules`]: lines before the
//! opening `enum Name ... {` are ignored, entry lines are collected until the
//! closing `};`, and the rest of the file is never read. [`TaskState`] then
//! resolves the collected entries to integer values across all headers of a
//! task.

mod entry;
mod resolve;
mod rules;
mod scan;

pub use entry::{RawEntry, split_entry};
pub use resolve::{IntLiteral, ResolvedEntry, TaskState, parse_int};
pub use rules::LineRules;
pub use scan::scan_enum;
