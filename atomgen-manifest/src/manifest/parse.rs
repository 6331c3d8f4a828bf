//! Manifest parsing from files and strings.

use std::{collections::HashMap, path::Path, str::FromStr};

use atomgen_core::Category;

use super::Manifest;
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "atomgen.toml")
    }
}

impl Manifest {
    /// Parse an atomgen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse an atomgen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, &source_ctx)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let syntax = &manifest.syntax;
    for (key, value) in [
        ("delimiter", &syntax.delimiter),
        ("wrapper", &syntax.wrapper),
        ("suffix", &syntax.suffix),
    ] {
        if value.is_empty() {
            return Err(ctx.validation_error(
                format!("syntax.{} must not be empty", key),
                ctx.find_key(key),
            ));
        }
    }
    if syntax.suffix.contains(['<', '>']) || syntax.wrapper.contains(['<', '>']) {
        return Err(ctx.validation_error(
            "syntax.wrapper and syntax.suffix must not contain '<' or '>'",
            ctx.find_key("suffix"),
        ));
    }
    if syntax.max_resolve_passes == 0 {
        return Err(ctx.validation_error(
            "syntax.max_resolve_passes must be at least 1",
            ctx.find_key("max_resolve_passes"),
        ));
    }

    // Each type name belongs to exactly one category
    let mut seen: HashMap<&str, Category> = HashMap::new();
    for (name, category) in manifest.types.entries() {
        if let Some(first) = seen.insert(name, category) {
            return Err(ctx.duplicate_type_error(name, first.as_str(), category.as_str()));
        }
    }

    let mut job_names: Vec<&str> = Vec::new();
    for job in &manifest.jobs {
        if job.name.trim().is_empty() {
            return Err(ctx.validation_error("job name must not be empty", ctx.find_key("name")));
        }
        if job_names.contains(&job.name.as_str()) {
            return Err(ctx.duplicate_job_error(&job.name));
        }
        job_names.push(&job.name);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::JobKind;

    #[test]
    fn test_empty_manifest_uses_defaults() {
        let manifest: Manifest = "".parse().unwrap();

        assert_eq!(manifest.syntax.delimiter, "// TEMPLATE:");
        assert_eq!(manifest.syntax.wrapper, "Atomic");
        assert_eq!(manifest.syntax.suffix, "A");
        assert_eq!(manifest.types.signed.len(), 5);
        assert_eq!(manifest.jobs.len(), 2);
    }

    #[test]
    fn test_parse_jobs() {
        let manifest: Manifest = r#"
            [[job]]
            name = "atomic"
            template = "Generator/atomic-template.swift"
            destination = "Source/atomic.swift"

            [[job]]
            name = "atomic-test"
            template = "Generator/atomic-test-template.swift"
            destination = "Tests/atomic-test.swift"
            kind = "tests"
            normalize = false
        "#
        .parse()
        .unwrap();

        assert_eq!(manifest.jobs.len(), 2);
        assert_eq!(manifest.jobs[0].kind, JobKind::Source);
        assert_eq!(
            manifest.jobs[0].template,
            PathBuf::from("Generator/atomic-template.swift")
        );
        assert_eq!(manifest.jobs[1].kind, JobKind::Tests);
        assert!(!manifest.jobs[1].normalizes());
    }

    #[test]
    fn test_partial_sections() {
        let manifest: Manifest = r#"
            [syntax]
            suffix = "Atomic"

            [types]
            signed = ["Int"]
        "#
        .parse()
        .unwrap();

        assert_eq!(manifest.syntax.suffix, "Atomic");
        assert_eq!(manifest.syntax.wrapper, "Atomic");
        assert_eq!(manifest.types.signed, vec!["Int".to_string()]);
        assert_eq!(manifest.types.unsigned.len(), 5);
    }

    #[test]
    fn test_duplicate_type_rejected() {
        let err = r#"
            [types]
            signed = ["Int"]
            unsigned = ["Int"]
        "#
        .parse::<Manifest>()
        .unwrap_err();

        match *err {
            Error::DuplicateType {
                name,
                first,
                second,
                second_span,
                ..
            } => {
                assert_eq!(name, "Int");
                assert_eq!(first, "signed");
                assert_eq!(second, "unsigned");
                assert!(second_span.is_some());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_job_rejected() {
        let err = r#"
            [[job]]
            name = "atomic"
            template = "a"
            destination = "b"

            [[job]]
            name = "atomic"
            template = "c"
            destination = "d"
        "#
        .parse::<Manifest>()
        .unwrap_err();

        assert!(matches!(*err, Error::DuplicateJob { ref name, .. } if name == "atomic"));
    }

    #[test]
    fn test_empty_suffix_rejected() {
        let err = "[syntax]\nsuffix = \"\"".parse::<Manifest>().unwrap_err();
        assert!(err.to_string().contains("syntax.suffix"));
    }

    #[test]
    fn test_angle_bracket_suffix_rejected() {
        let err = "[syntax]\nsuffix = \"<A>\"".parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_zero_passes_rejected() {
        let err = "[syntax]\nmax_resolve_passes = 0"
            .parse::<Manifest>()
            .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = "[syntax]\nwraper = \"Atomic\"".parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let err = r#"
            [[job]]
            name = "x"
            template = "a"
            destination = "b"
            kind = "docs"
        "#
        .parse::<Manifest>()
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }
}
