use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Keeps the manifest text and filename together so error factories
/// don't need both passed around.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Find the span of a quoted string value (`"Int"`), skipping the quotes.
    ///
    /// `nth` selects a later occurrence when the same value appears twice.
    pub fn find_quoted(&self, value: &str, nth: usize) -> Option<SourceSpan> {
        let needle = format!("\"{}\"", value);
        self.src
            .match_indices(&needle)
            .nth(nth)
            .map(|(pos, _)| SourceSpan::from((pos + 1, value.len())))
    }

    /// Find the span of a bare key (`max_resolve_passes`).
    pub fn find_key(&self, key: &str) -> Option<SourceSpan> {
        self.src
            .find(key)
            .map(|pos| SourceSpan::from((pos, key.len())))
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, labelled at `span` when known.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Create a duplicate type error.
    pub fn duplicate_type_error(
        &self,
        name: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Box<Error> {
        let name = name.into();
        Box::new(Error::DuplicateType {
            src: self.named_source(),
            first_span: self.find_quoted(&name, 0),
            second_span: self.find_quoted(&name, 1),
            name,
            first: first.into(),
            second: second.into(),
        })
    }

    /// Create a duplicate job error.
    pub fn duplicate_job_error(&self, name: impl Into<String>) -> Box<Error> {
        let name = name.into();
        Box::new(Error::DuplicateJob {
            src: self.named_source(),
            span: self.find_quoted(&name, 1),
            name,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("omit --config to use the built-in job list"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse atomgen.toml")]
    #[diagnostic(code(atomgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("type '{name}' is listed as both {first} and {second}")]
    #[diagnostic(
        code(atomgen::duplicate_type),
        help("every type belongs to exactly one category; remove '{name}' from [types].{second}")
    )]
    DuplicateType {
        #[source_code]
        src: NamedSource<String>,
        #[label("first listed here")]
        first_span: Option<SourceSpan>,
        #[label("listed again here")]
        second_span: Option<SourceSpan>,
        name: String,
        first: String,
        second: String,
    },

    #[error("duplicate job '{name}'")]
    #[diagnostic(
        code(atomgen::duplicate_job),
        help("give each [[job]] a unique name so it can be selected with --job")
    )]
    DuplicateJob {
        #[source_code]
        src: NamedSource<String>,
        #[label("redefined here")]
        span: Option<SourceSpan>,
        name: String,
    },

    #[error("{message}")]
    #[diagnostic(code(atomgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_quoted_nth() {
        let ctx = SourceContext::new(r#"a = ["Int"]
b = ["Int"]"#, "atomgen.toml");

        let first = ctx.find_quoted("Int", 0).unwrap();
        let second = ctx.find_quoted("Int", 1).unwrap();
        assert_eq!(first.offset(), 6);
        assert_eq!(second.offset(), 18);
        assert_eq!(second.len(), 3);
        assert!(ctx.find_quoted("Int", 2).is_none());
    }
}
