//! Placeholder tokens and their bindings.

use indexmap::IndexMap;

use crate::{Error, Result};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Format the placeholder token for `key` (e.g. `T` -> `{{T}}`).
pub fn token(key: &str) -> String {
    format!("{OPEN}{key}{CLOSE}")
}

/// Collect the keys of every placeholder token in `text`, in order of appearance.
pub fn tokens(text: &str) -> Vec<&str> {
    let mut keys = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find(OPEN) {
        let after = &rest[start + OPEN.len()..];
        match after.find(CLOSE) {
            Some(end) if is_key(&after[..end]) => {
                keys.push(&after[..end]);
                rest = &after[end + CLOSE.len()..];
            }
            Some(_) => rest = &rest[start + 1..],
            None => break,
        }
    }
    keys
}

fn is_key(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

/// A set of placeholder values for one expansion.
///
/// Substitution is a single left-to-right scan: a bound value is copied into
/// the output verbatim and never scanned again, so the result does not depend
/// on the order keys were bound in. Tokens with no binding are left as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    values: IndexMap<String, String>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `key` to `value`, returning the updated set.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Bind `key` to `value`, replacing any earlier binding.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true if `text` still contains a token this set can replace.
    pub fn has_bound_token(&self, text: &str) -> bool {
        tokens(text).iter().any(|key| self.values.contains_key(*key))
    }

    /// Replace every bound token in `text` once.
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(start) = rest.find(OPEN) {
            let after = &rest[start + OPEN.len()..];
            let Some(end) = after.find(CLOSE) else {
                break;
            };
            match self.values.get(&after[..end]) {
                Some(value) => {
                    out.push_str(&rest[..start]);
                    out.push_str(value);
                    rest = &after[end + CLOSE.len()..];
                }
                None => {
                    // Step over one brace so `{{{T}}` still finds `{{T}}`
                    out.push_str(&rest[..start + 1]);
                    rest = &rest[start + 1..];
                }
            }
        }

        out.push_str(rest);
        out
    }

    /// Substitute repeatedly until no bound token remains.
    ///
    /// Values may themselves contain tokens (a snippet that refers to the
    /// type name, say), so one pass is not always enough. Gives up with
    /// [`Error::ResolveLimit`] after `max_passes` rounds.
    pub fn resolve(&self, text: &str, max_passes: usize) -> Result<String> {
        let mut current = text.to_string();

        for _ in 0..max_passes {
            if !self.has_bound_token(&current) {
                return Ok(current);
            }
            current = self.apply(&current);
        }

        match tokens(&current)
            .into_iter()
            .find(|key| self.values.contains_key(*key))
        {
            Some(key) => Err(Box::new(Error::ResolveLimit {
                token: token(key),
                passes: max_passes,
            })),
            None => Ok(current),
        }
    }
}
