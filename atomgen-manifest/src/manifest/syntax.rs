//! Template syntax markers.

use serde::Deserialize;

/// Markers the engine looks for in template text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Syntax {
    /// Starts a fragment; the rest of the line is its name
    pub delimiter: String,
    /// Generic wrapper type name (`Atomic` in `Atomic<Int>`)
    pub wrapper: String,
    /// Suffix appended to a bare type when the wrapper is stripped
    pub suffix: String,
    /// Cap on nested placeholder substitution rounds
    pub max_resolve_passes: usize,
}

impl Default for Syntax {
    fn default() -> Self {
        Self {
            delimiter: "// TEMPLATE:".to_string(),
            wrapper: "Atomic".to_string(),
            suffix: "A".to_string(),
            max_resolve_passes: 16,
        }
    }
}
