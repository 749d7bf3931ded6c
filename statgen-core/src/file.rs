use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the same content and was left untouched
    Unchanged,
}

/// Whether a file on disk matches freshly generated content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    UpToDate,
    Stale,
    Missing,
}

/// A generated file
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content (rewritten only if changed)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Compare the content on disk with this file's content
    pub fn freshness(&self) -> Result<Freshness> {
        if !self.exists() {
            return Ok(Freshness::Missing);
        }
        let current = std::fs::read_to_string(&self.path)
            .wrap_err_with(|| format!("failed to read '{}'", self.path.display()))?;
        if current == self.content {
            Ok(Freshness::UpToDate)
        } else {
            Ok(Freshness::Stale)
        }
    }

    /// Write the file unless it already holds the same content, so the
    /// modification time of an up-to-date file is preserved for build systems.
    pub fn write(&self) -> Result<WriteResult> {
        if self.freshness()? == Freshness::UpToDate {
            Ok(WriteResult::Unchanged)
        } else {
            write_file(&self.path, &self.content)?;
            Ok(WriteResult::Written)
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("src").join("gen").join("statistics.rs");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_file_write_if_changed_skips_identical() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("statistics.rs");

        fs::write(&path, "same").unwrap();

        let result = File::new(&path, "same").write().unwrap();
        assert_eq!(result, WriteResult::Unchanged);
    }

    #[test]
    fn test_file_write_if_changed_rewrites_stale() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("statistics.rs");

        fs::write(&path, "old").unwrap();

        let result = File::new(&path, "new").write().unwrap();
        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_freshness() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("statistics.rs");
        let file = File::new(&path, "content");

        assert_eq!(file.freshness().unwrap(), Freshness::Missing);

        fs::write(&path, "other").unwrap();
        assert_eq!(file.freshness().unwrap(), Freshness::Stale);

        fs::write(&path, "content").unwrap();
        assert_eq!(file.freshness().unwrap(), Freshness::UpToDate);
    }
}
