//! Rewrites deprecated increment/decrement idioms in generated code.
//!
//! Two passes run in order:
//!
//! 1. Exact statement forms such as `let result = ++x.value;` become a
//!    two-statement equivalent without the `++`/`--` operator.
//! 2. Scoped blocks that exist only to exercise `++n`, `n++`, `--n` or `n--`
//!    are deleted, from the nearest `do {` before the marker through the
//!    first `}` after it.

use tracing::{debug, warn};

/// Outcome of a normalization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub text: String,
    /// Statements rewritten by the first pass
    pub replaced: usize,
    /// Blocks deleted by the second pass
    pub removed: usize,
    /// True if the block pass stopped on a marker with no enclosing block
    pub aborted: bool,
}

/// Deprecated-idiom rules.
#[derive(Debug, Clone)]
pub struct Normalizer {
    statements: Vec<(String, String)>,
    markers: Vec<String>,
    opener: String,
    closer: String,
}

impl Default for Normalizer {
    fn default() -> Self {
        let statements = [
            ("let result = ++x.value;", "let result = x.value; x.value += 1;"),
            ("let result = --x.value;", "let result = x.value; x.value -= 1;"),
            ("let result = x.value++;", "let result = x.value; x.value += 1;"),
            ("let result = x.value--;", "let result = x.value; x.value -= 1;"),
        ];

        Self {
            statements: statements
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
            markers: ["++n", "n++", "--n", "n--"]
                .iter()
                .map(|m| m.to_string())
                .collect(),
            opener: "do {".to_string(),
            closer: "}".to_string(),
        }
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run both passes over `text`.
    pub fn normalize(&self, text: &str) -> Normalized {
        let (text, replaced) = self.replace_statements(text);
        let (text, removed, aborted) = self.remove_blocks(text);

        debug!(replaced, removed, "normalized deprecated idioms");
        Normalized {
            text,
            replaced,
            removed,
            aborted,
        }
    }

    fn replace_statements(&self, text: &str) -> (String, usize) {
        let mut out = text.to_string();
        let mut count = 0;

        for (from, to) in &self.statements {
            let hits = out.matches(from.as_str()).count();
            if hits > 0 {
                out = out.replace(from.as_str(), to);
                count += hits;
            }
        }

        (out, count)
    }

    fn remove_blocks(&self, mut text: String) -> (String, usize, bool) {
        let mut removed = 0;

        for marker in &self.markers {
            while let Some(pos) = text.find(marker.as_str()) {
                let Some(start) = text[..pos].rfind(self.opener.as_str()) else {
                    warn!(marker = %marker, "no enclosing block before deprecated marker");
                    return (text, removed, true);
                };
                let after = pos + marker.len();
                let Some(close) = text[after..].find(self.closer.as_str()) else {
                    warn!(marker = %marker, "no closing brace after deprecated marker");
                    return (text, removed, true);
                };

                text.replace_range(start..after + close + self.closer.len(), "");
                removed += 1;
            }
        }

        (text, removed, false)
    }
}
