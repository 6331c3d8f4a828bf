//! Job kinds.

use std::fmt;

use serde::Deserialize;

/// Which axis driver a job runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobKind {
    /// Type aliases, initializers and operator overloads
    #[default]
    Source,
    /// One test function per type exercising each operator
    Tests,
}

impl JobKind {
    /// Returns the kind identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobKind::Source => "source",
            JobKind::Tests => "tests",
        }
    }
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
