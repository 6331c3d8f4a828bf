//! Lint for wrapper syntax the rewriter cannot collapse.

use super::super::Lint;
use crate::pipeline::{Diagnostic, GenerationContext};

/// Warns when a fragment opens the wrapper (`Atomic<`) with no `>` after it.
///
/// The rewriter stops at such a token, so wrappers after it stay unrewritten.
pub struct UnclosedWrapperLint;

impl Lint for UnclosedWrapperLint {
    fn name(&self) -> &'static str {
        "unclosed-wrapper"
    }

    fn description(&self) -> &'static str {
        "Detect wrapper types with no closing '>'"
    }

    fn check(&self, ctx: &GenerationContext, diagnostics: &mut Vec<Diagnostic>) {
        let rewriter = ctx.rewriter();

        for (name, body) in ctx.template.fragments() {
            if rewriter.has_unclosed(body) {
                diagnostics.push(
                    Diagnostic::warning(
                        "lint",
                        format!(
                            "'{}' is never closed; the rest of the fragment is left as written",
                            rewriter.open_token()
                        ),
                    )
                    .at(name),
                );
            }
        }
    }
}
