use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use tracing::debug;

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// Destination already held identical bytes, nothing was touched
    Unchanged,
}

/// How to handle an existing destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Always overwrite
    Always,
    /// Only write when the bytes on disk differ (or cannot be read)
    #[default]
    IfChanged,
}

/// A generated file waiting to be written.
pub struct File {
    path: PathBuf,
    content: String,
    overwrite: Overwrite,
}

impl File {
    /// Create a new file with the given path and content (default: write only if changed)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            overwrite: Overwrite::default(),
        }
    }

    /// Override the overwrite rule.
    pub fn overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check whether the destination already holds exactly this content.
    ///
    /// An unreadable or missing destination counts as "no prior output".
    pub fn is_unchanged(&self) -> bool {
        match std::fs::read(&self.path) {
            Ok(existing) => existing == self.content.as_bytes(),
            Err(_) => false,
        }
    }

    /// Write the file according to its overwrite rule
    pub fn write(&self) -> Result<WriteResult> {
        if self.overwrite == Overwrite::IfChanged && self.is_unchanged() {
            debug!(path = %self.path.display(), "destination unchanged, skipping write");
            return Ok(WriteResult::Unchanged);
        }

        write_file(&self.path, &self.content)?;
        debug!(path = %self.path.display(), bytes = self.content.len(), "wrote destination");
        Ok(WriteResult::Written)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("atomic.swift");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_missing_destination() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("atomic.swift");

        let result = File::new(&path, "generated").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "generated");
    }

    #[test]
    fn test_identical_content_is_not_rewritten() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("atomic.swift");
        fs::write(&path, "same").unwrap();
        let before = fs::metadata(&path).unwrap().modified().unwrap();

        let result = File::new(&path, "same").write().unwrap();

        assert_eq!(result, WriteResult::Unchanged);
        assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), before);
    }

    #[test]
    fn test_changed_content_is_rewritten() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("atomic.swift");
        fs::write(&path, "old").unwrap();

        let result = File::new(&path, "new").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_always_overwrites_identical_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("atomic.swift");
        fs::write(&path, "same").unwrap();

        let result = File::new(&path, "same")
            .overwrite(Overwrite::Always)
            .write()
            .unwrap();

        assert_eq!(result, WriteResult::Written);
    }

    #[test]
    fn test_write_failure_is_reported() {
        let temp = TempDir::new().unwrap();
        // A directory in place of the destination cannot be written as a file
        let path = temp.path().join("dir");
        fs::create_dir(&path).unwrap();

        let err = File::new(&path, "content").write().unwrap_err();
        assert!(err.to_string().contains("failed to write"));
    }
}
