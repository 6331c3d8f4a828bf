//! Manifest types and parsing for atomgen.toml files.

mod file;
mod kind;
mod parse;
mod syntax;
mod types;

use std::path::PathBuf;

pub use file::ManifestFile;
pub use kind::JobKind;
use serde::Deserialize;
pub use syntax::Syntax;
pub use types::TypeTable;

/// Root manifest for atomgen.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Template syntax markers
    #[serde(default)]
    pub syntax: Syntax,

    /// Primitive type catalog, grouped by category
    #[serde(default)]
    pub types: TypeTable,

    /// Template → destination jobs, run in declaration order
    #[serde(default = "default_jobs", rename = "job")]
    pub jobs: Vec<Job>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            syntax: Syntax::default(),
            types: TypeTable::default(),
            jobs: default_jobs(),
        }
    }
}

impl Manifest {
    /// Find a job by name.
    pub fn job(&self, name: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.name == name)
    }
}

/// One template → destination pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Job {
    /// Name used in reports and with `--job`
    pub name: String,
    /// Template document to expand
    pub template: PathBuf,
    /// Generated output path
    pub destination: PathBuf,
    /// Which axis driver expands the template
    #[serde(default)]
    pub kind: JobKind,
    /// Rewrite deprecated increment/decrement idioms in the output
    #[serde(default)]
    pub normalize: Option<bool>,
}

impl Job {
    pub fn new(
        name: impl Into<String>,
        template: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
        kind: JobKind,
    ) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
            destination: destination.into(),
            kind,
            normalize: None,
        }
    }

    /// Whether the deprecated-idiom normalizer runs (defaults to on for test suites).
    pub fn normalizes(&self) -> bool {
        self.normalize.unwrap_or(self.kind == JobKind::Tests)
    }
}

/// The two jobs run when no atomgen.toml is present.
fn default_jobs() -> Vec<Job> {
    vec![
        Job::new(
            "atomic",
            "atomic-template.swift",
            "../Source/atomic.swift",
            JobKind::Source,
        ),
        Job::new(
            "atomic-test",
            "atomic-test-template.swift",
            "../Tests/atomic-test.swift",
            JobKind::Tests,
        ),
    ]
}
