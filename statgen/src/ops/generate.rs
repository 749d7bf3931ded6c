//! Generate operation - writing the bindings file.

use std::path::Path;

use eyre::{Context, Result};
use statgen_codegen::GeneratedFile;
use statgen_core::File;
use tracing::info;

use crate::reports::{EnumSummary, GenerateReport};

/// Write generated bindings to `path`, leaving an identical file untouched.
pub fn write_bindings(generated: &GeneratedFile, path: &Path) -> Result<GenerateReport> {
    let result = File::new(path, generated.content.as_str())
        .write()
        .wrap_err("Failed to write bindings")?;
    info!(path = %path.display(), ?result, "bindings file");

    Ok(GenerateReport {
        path: path.to_path_buf(),
        result,
        enums: generated.enums.iter().map(EnumSummary::from).collect(),
    })
}

#[cfg(test)]
mod tests {
    use statgen_codegen::EnumBinding;
    use statgen_core::WriteResult;

    use super::*;

    fn generated() -> GeneratedFile {
        GeneratedFile {
            content: "pub enum A {}\n".to_string(),
            enums: vec![EnumBinding {
                name: "A".to_string(),
                variants: Vec::new(),
            }],
        }
    }

    #[test]
    fn test_write_then_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("src").join("statistics.rs");

        let first = write_bindings(&generated(), &path).unwrap();
        assert_eq!(first.result, WriteResult::Written);
        assert_eq!(first.enums[0].name, "A");

        let second = write_bindings(&generated(), &path).unwrap();
        assert_eq!(second.result, WriteResult::Unchanged);
    }
}
