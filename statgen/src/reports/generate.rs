//! Generate command report data structures.

use std::path::PathBuf;

use statgen_codegen::EnumBinding;
use statgen_core::WriteResult;

use super::output::{Output, Report};

/// Variant count and value range of one generated enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumSummary {
    pub name: String,
    pub variants: usize,
    pub range: Option<(i64, i64)>,
}

impl From<&EnumBinding> for EnumSummary {
    fn from(binding: &EnumBinding) -> Self {
        Self {
            name: binding.name.clone(),
            variants: binding.variants.len(),
            range: binding.value_range(),
        }
    }
}

impl EnumSummary {
    pub fn describe(&self) -> String {
        let plural = if self.variants == 1 { "" } else { "s" };
        match self.range {
            Some((min, max)) => format!(
                "{} ({} variant{}, {}..={})",
                self.name, self.variants, plural, min, max
            ),
            None => format!("{} ({} variants)", self.name, self.variants),
        }
    }
}

/// Report data from writing a bindings file.
#[derive(Debug)]
pub struct GenerateReport {
    pub path: PathBuf,
    pub result: WriteResult,
    pub enums: Vec<EnumSummary>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match self.result {
            WriteResult::Written => {
                out.preformatted(&format!("Generated: {}", self.path.display()))
            }
            WriteResult::Unchanged => {
                out.preformatted(&format!("Up to date: {}", self.path.display()))
            }
        }
        for summary in &self.enums {
            out.list_item(&summary.describe());
        }
    }
}
