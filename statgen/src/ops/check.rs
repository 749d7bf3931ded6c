//! Check operation - extraction without output.

use std::path::Path;

use eyre::Result;
use statgen_codegen::{Generator, render_file};
use statgen_core::File;

use crate::reports::{CheckReport, EnumSummary, FreshnessCheck};

/// Execute the check operation.
///
/// Every task is extracted even if an earlier one fails, so the report lists
/// all problems at once. The freshness of `against` is only checked when all
/// tasks succeeded.
pub fn check(
    generator: &Generator<'_>,
    label: String,
    against: Option<&Path>,
) -> Result<CheckReport> {
    let manifest = generator.manifest();
    let mut bindings = Vec::new();
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for task in &manifest.tasks {
        match generator.extract_task(task) {
            Ok(binding) => {
                if binding.variants.is_empty() {
                    warnings.push(format!("enum '{}' has no variants", binding.name));
                }
                bindings.push(binding);
            }
            Err(e) => errors.push(format!("{:?}", miette::Report::new(*e))),
        }
    }

    let freshness = match against {
        Some(path) if errors.is_empty() => {
            let content = render_file(&manifest.output, &bindings);
            Some(FreshnessCheck {
                path: path.to_path_buf(),
                freshness: File::new(path, content).freshness()?,
            })
        }
        _ => None,
    };

    Ok(CheckReport {
        label,
        enums: bindings.iter().map(EnumSummary::from).collect(),
        errors,
        warnings,
        freshness,
    })
}
