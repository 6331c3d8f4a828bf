//! Lint for templates with no fragments.

use super::super::Lint;
use crate::pipeline::{Diagnostic, GenerationContext};

/// Warns when the delimiter never appears, so the output is just the header.
pub struct MissingDelimiterLint;

impl Lint for MissingDelimiterLint {
    fn name(&self) -> &'static str {
        "missing-delimiter"
    }

    fn description(&self) -> &'static str {
        "Detect templates that declare no fragments"
    }

    fn check(&self, ctx: &GenerationContext, diagnostics: &mut Vec<Diagnostic>) {
        if ctx.template.is_empty() {
            diagnostics.push(Diagnostic::warning(
                "lint",
                format!(
                    "template has no '{}' lines; output will contain only its header",
                    ctx.syntax.delimiter
                ),
            ));
        }
    }
}
