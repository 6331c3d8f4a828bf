//! Lint for fragments declared more than once.

use super::super::Lint;
use crate::pipeline::{Diagnostic, GenerationContext};

/// Warns when a fragment name is declared twice; only the last body is used.
pub struct DuplicateFragmentLint;

impl Lint for DuplicateFragmentLint {
    fn name(&self) -> &'static str {
        "duplicate-fragment"
    }

    fn description(&self) -> &'static str {
        "Detect fragment names declared more than once"
    }

    fn check(&self, ctx: &GenerationContext, diagnostics: &mut Vec<Diagnostic>) {
        for name in ctx.template.duplicates() {
            diagnostics.push(
                Diagnostic::warning(
                    "lint",
                    format!("fragment '{}' is declared more than once; the last one wins", name),
                )
                .at(name.as_str()),
            );
        }
    }
}
