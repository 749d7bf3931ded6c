//! Manifest types and parsing for task table files.

mod builtin;
mod parse;
mod validate;

use std::path::PathBuf;

use serde::Deserialize;

/// Name suffix marking the synthetic count entry closing a C enum.
pub const DEFAULT_SENTINEL_SUFFIX: &str = "ENUM_MAX";

/// Root of the task table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Settings for the generated file
    #[serde(default)]
    pub output: OutputConfig,

    /// Enums to generate, in output order
    #[serde(default)]
    pub tasks: Vec<TaskConfig>,
}

/// Settings shared by every generated enum.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Doc comment lines opening the generated file
    pub notice: Vec<String>,
    /// Traits derived on each enum
    pub derives: Vec<String>,
    /// Integer representation of each enum
    pub repr: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            notice: vec![
                "This file is generated by statgen.".to_string(),
                "Re-generate it if you upgrade to a new version of RocksDB.".to_string(),
            ],
            derives: ["Copy", "Clone", "Debug", "Eq", "PartialEq"]
                .into_iter()
                .map(String::from)
                .collect(),
            repr: "u32".to_string(),
        }
    }
}

/// One generated enum, assembled from one or more C enums.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskConfig {
    /// Name of the generated Rust enum
    pub name: String,

    /// Entries with this suffix are recorded for later reference instead of emitted
    #[serde(default = "default_sentinel_suffix")]
    pub sentinel_suffix: String,

    /// Headers to scan, in order
    #[serde(default)]
    pub sources: Vec<SourceConfig>,
}

impl TaskConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sentinel_suffix: default_sentinel_suffix(),
            sources: Vec::new(),
        }
    }

    pub fn source(mut self, path: impl Into<PathBuf>, enum_name: impl Into<String>) -> Self {
        self.sources.push(SourceConfig {
            path: path.into(),
            enum_name: enum_name.into(),
        });
        self
    }
}

/// A C enum inside a header file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    /// Header path, relative paths resolve against the run's root directory
    pub path: PathBuf,

    /// Name of the C enum, e.g. `Tickers` for `enum Tickers : uint32_t {`
    #[serde(rename = "enum")]
    pub enum_name: String,
}

fn default_sentinel_suffix() -> String {
    DEFAULT_SENTINEL_SUFFIX.to_string()
}
