//! Lint trait for template checks.

use crate::pipeline::{Diagnostic, GenerationContext};

/// Name and description of a lint, for reports.
#[derive(Debug, Clone)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A check over a job's template.
pub trait Lint: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Inspect the context and add any diagnostics.
    fn check(&self, ctx: &GenerationContext, diagnostics: &mut Vec<Diagnostic>);

    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
