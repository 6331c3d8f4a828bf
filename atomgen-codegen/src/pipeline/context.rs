//! State shared by the phases of one job.

use atomgen_manifest::{Job, Syntax};
use atomgen_template::Template;
use eyre::{Result, eyre};

use super::diagnostic::{Diagnostic, Severity};
use crate::{TypeCatalog, WrapperRewriter};

/// Everything a job needs, plus what its phases produce.
#[derive(Debug)]
pub struct GenerationContext {
    pub job: Job,
    pub template: Template,
    pub catalog: TypeCatalog,
    pub syntax: Syntax,
    /// The generated document (populated by the expand phase).
    pub output: Option<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationContext {
    pub fn new(job: Job, template: Template, catalog: TypeCatalog, syntax: Syntax) -> Self {
        Self {
            job,
            template,
            catalog,
            syntax,
            output: None,
            diagnostics: Vec::new(),
        }
    }

    /// Wrapper rewriter for this job's syntax markers.
    pub fn rewriter(&self) -> WrapperRewriter {
        WrapperRewriter::new(&self.syntax.wrapper, &self.syntax.suffix)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Take the generated document out of the context.
    pub fn take_output(&mut self) -> Result<String> {
        self.output
            .take()
            .ok_or_else(|| eyre!("no output for job '{}': expand phase did not run", self.job.name))
    }
}

#[cfg(test)]
mod tests {
    use atomgen_manifest::JobKind;

    use super::*;

    fn make_context() -> GenerationContext {
        GenerationContext::new(
            Job::new("atomic", "atomic-template.swift", "atomic.swift", JobKind::Source),
            Template::parse("// header"),
            TypeCatalog::swift(),
            Syntax::default(),
        )
    }

    #[test]
    fn test_context_creation() {
        let ctx = make_context();

        assert!(ctx.output.is_none());
        assert!(ctx.diagnostics.is_empty());
        assert_eq!(ctx.rewriter().open_token(), "Atomic<");
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = make_context();

        ctx.add_error("expand", "test error");
        ctx.add_warning("lint", "test warning");
        ctx.add_info("normalize", "just info");

        assert!(ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warning_count(), 1);
    }

    #[test]
    fn test_take_output_before_expand() {
        let mut ctx = make_context();

        let err = ctx.take_output().unwrap_err();
        assert!(err.to_string().contains("job 'atomic'"));

        ctx.output = Some("generated".to_string());
        assert_eq!(ctx.take_output().unwrap(), "generated");
        assert!(ctx.output.is_none());
    }
}
