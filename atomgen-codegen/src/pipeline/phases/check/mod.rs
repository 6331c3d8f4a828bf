//! Check phase - runs template lints before expansion.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::{Lint, LintInfo};
pub use lints::{
    DuplicateFragmentLint, MissingDelimiterLint, MissingFragmentLint, UnclosedWrapperLint,
};
use tracing::debug;

use crate::pipeline::{GenerationContext, Phase};

/// Phase that checks the template with a configurable set of lints.
pub struct LintPhase {
    lints: Vec<Box<dyn Lint>>,
}

impl LintPhase {
    /// A lint phase with every built-in lint.
    pub fn new() -> Self {
        Self::empty()
            .with_lint(MissingDelimiterLint)
            .with_lint(DuplicateFragmentLint)
            .with_lint(MissingFragmentLint)
            .with_lint(UnclosedWrapperLint)
    }

    /// A lint phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Lints in the order they run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for LintPhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for LintPhase {
    fn name(&self) -> &'static str {
        "lint"
    }

    fn description(&self) -> &'static str {
        "Check the template and collect diagnostics"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let mut found = Vec::new();
        for lint in &self.lints {
            lint.check(ctx, &mut found);
        }
        debug!(job = %ctx.job.name, diagnostics = found.len(), "lints finished");
        ctx.diagnostics.extend(found);

        // Warnings are allowed through
        if ctx.has_errors() {
            bail!(
                "template '{}' failed checks with {} error(s)",
                ctx.job.template.display(),
                ctx.error_count()
            );
        }

        Ok(())
    }
}
