use std::path::{Path, PathBuf};

use tracing::debug;

use super::Manifest;
use crate::Result;

/// A loaded manifest plus the directory its relative paths resolve against.
#[derive(Debug, Clone)]
pub struct ManifestFile {
    path: Option<PathBuf>,
    root: PathBuf,
    manifest: Manifest,
}

impl ManifestFile {
    /// Open and parse an atomgen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let manifest = Manifest::from_file(&path)?;
        let root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        debug!(path = %path.display(), jobs = manifest.jobs.len(), "loaded manifest");

        Ok(Self {
            path: Some(path),
            root,
            manifest,
        })
    }

    /// Open `path` if it exists, otherwise fall back to the built-in defaults
    /// rooted at the working directory.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::open(path);
        }

        debug!(path = %path.display(), "no manifest found, using built-in jobs");
        Ok(Self {
            path: None,
            root: PathBuf::from("."),
            manifest: Manifest::default(),
        })
    }

    /// The manifest path, if one was read.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Resolve a job path against the manifest directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}
