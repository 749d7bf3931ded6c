//! Check command report data structures.

use std::path::PathBuf;

use statgen_core::Freshness;

use super::{
    EnumSummary,
    output::{Output, Report},
};

/// Comparison of an existing bindings file with fresh output.
#[derive(Debug)]
pub struct FreshnessCheck {
    pub path: PathBuf,
    pub freshness: Freshness,
}

/// Report data from extracting every task without writing.
#[derive(Debug)]
pub struct CheckReport {
    /// Name of the task table in use.
    pub label: String,
    /// Enums that were extracted.
    pub enums: Vec<EnumSummary>,
    /// Rendered diagnostics of failed tasks.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Set when an existing file was compared.
    pub freshness: Option<FreshnessCheck>,
}

impl CheckReport {
    /// Whether the check passed (no errors and, if compared, an up-to-date file).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
            && self
                .freshness
                .as_ref()
                .is_none_or(|f| f.freshness == Freshness::UpToDate)
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        if !self.enums.is_empty() {
            out.section(&self.label);
            for summary in &self.enums {
                out.list_item(&summary.describe());
            }
        }

        if let Some(check) = &self.freshness {
            let path = check.path.display();
            match check.freshness {
                Freshness::UpToDate => out.preformatted(&format!("✓ {} is up to date", path)),
                Freshness::Stale => out.warning(&format!("{} is stale, re-run statgen", path)),
                Freshness::Missing => out.warning(&format!("{} does not exist", path)),
            }
        }

        if self.errors.is_empty() {
            out.newline();
            out.preformatted(&format!("✓ {} extracted cleanly", self.label));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::TestOutput;

    #[test]
    fn test_render_stale() {
        let report = CheckReport {
            label: "built-in task table".to_string(),
            enums: vec![EnumSummary {
                name: "A".to_string(),
                variants: 1,
                range: Some((0, 0)),
            }],
            errors: Vec::new(),
            warnings: Vec::new(),
            freshness: Some(FreshnessCheck {
                path: PathBuf::from("out.rs"),
                freshness: Freshness::Stale,
            }),
        };
        assert!(!report.is_valid());

        let mut out = TestOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            [
                "built-in task table:",
                "  - A (1 variant, 0..=0)",
                "warning: out.rs is stale, re-run statgen",
                "",
                "✓ built-in task table extracted cleanly",
            ]
        );
    }

    #[test]
    fn test_render_errors() {
        let report = CheckReport {
            label: "statgen.toml".to_string(),
            enums: Vec::new(),
            errors: vec!["enum 'Tickers' not found".to_string()],
            warnings: vec!["enum 'B' has no variants".to_string()],
            freshness: None,
        };
        assert!(!report.is_valid());

        let mut out = TestOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            [
                "enum 'Tickers' not found",
                "warning: enum 'B' has no variants",
            ]
        );
    }
}
