//! Template documents split into named fragments.

use std::path::Path;

use indexmap::IndexMap;
use tracing::debug;

use crate::{Bindings, Error, Result};

/// Marker that starts a new fragment. The rest of its line is the fragment name.
pub const DEFAULT_DELIMITER: &str = "// TEMPLATE:";

/// Name of the fragment holding the text before the first delimiter.
pub const BASE: &str = "base";

/// A parsed template document.
///
/// Maps fragment names to their trimmed bodies. The [`BASE`] fragment always
/// exists, even when the document starts with a delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    fragments: IndexMap<String, String>,
    duplicates: Vec<String>,
}

impl Template {
    /// Parse a document using [`DEFAULT_DELIMITER`].
    pub fn parse(src: &str) -> Self {
        Self::parse_with(src, DEFAULT_DELIMITER)
    }

    /// Parse a document split on `delimiter`.
    ///
    /// A document without any delimiter becomes a lone base fragment.
    pub fn parse_with(src: &str, delimiter: &str) -> Self {
        let mut parts = src.split(delimiter);
        let mut fragments = IndexMap::new();
        let mut duplicates = Vec::new();

        let base = parts.next().unwrap_or_default();
        fragments.insert(BASE.to_string(), base.trim().to_string());

        for part in parts {
            let (name, body) = part.split_once('\n').unwrap_or((part, ""));
            let name = name.trim().to_string();
            if fragments.contains_key(&name) {
                duplicates.push(name.clone());
            }
            fragments.insert(name, body.trim().to_string());
        }

        debug!(
            fragments = fragments.len() - 1,
            duplicates = duplicates.len(),
            "parsed template"
        );

        Self {
            fragments,
            duplicates,
        }
    }

    /// Read and parse a template file.
    pub fn open(path: impl AsRef<Path>, delimiter: &str) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        debug!(path = %path.display(), "reading template");
        Ok(Self::parse_with(&content, delimiter))
    }

    /// The text before the first delimiter.
    pub fn base(&self) -> &str {
        self.fragment(BASE)
    }

    /// Look up a fragment body. `None` if the template never names it.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fragments.get(name).map(String::as_str)
    }

    /// Look up a fragment body, treating a missing fragment as empty.
    pub fn fragment(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fragments.contains_key(name)
    }

    /// Fragment names in document order, excluding [`BASE`].
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fragments
            .keys()
            .map(String::as_str)
            .filter(|name| *name != BASE)
    }

    /// Iterate over `(name, body)` pairs, base first.
    pub fn fragments(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fragments
            .iter()
            .map(|(name, body)| (name.as_str(), body.as_str()))
    }

    /// Number of named fragments, excluding [`BASE`].
    pub fn len(&self) -> usize {
        self.fragments.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names that were declared more than once. The last declaration wins.
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }

    /// Render a fragment with the given bindings.
    ///
    /// Missing fragments render to the empty string so inapplicable
    /// sections contribute nothing.
    pub fn expand(&self, name: &str, bindings: &Bindings) -> String {
        self.get(name)
            .map(|body| bindings.apply(body))
            .unwrap_or_default()
    }
}
