//! Lint for fragments the job kind expands but the template lacks.

use atomgen_manifest::JobKind;

use super::super::Lint;
use crate::{
    axis::{
        ASSERT, INIT_VARS, INITIALIZE_BODY, INITIALIZE_FOOT, INITIALIZE_HEAD, OPERATOR_SECTIONS,
        Snippet, TEST, TYPEALIAS,
    },
    pipeline::{Diagnostic, GenerationContext},
};

/// Warns about each expected fragment that will render empty.
pub struct MissingFragmentLint;

/// Fragments the axis driver for `kind` looks up, in lookup order.
pub fn expected_fragments(kind: JobKind) -> Vec<&'static str> {
    match kind {
        JobKind::Source => {
            let mut names = vec![TYPEALIAS, INITIALIZE_HEAD, INITIALIZE_BODY, INITIALIZE_FOOT];
            names.extend(OPERATOR_SECTIONS.iter().map(|section| section.fragment));
            names
        }
        JobKind::Tests => {
            let mut names = vec![TEST, INIT_VARS, ASSERT];
            names.extend(Snippet::ALL.iter().map(|snippet| snippet.fragment()));
            names
        }
    }
}

impl Lint for MissingFragmentLint {
    fn name(&self) -> &'static str {
        "missing-fragment"
    }

    fn description(&self) -> &'static str {
        "Detect expected fragments that are absent from the template"
    }

    fn check(&self, ctx: &GenerationContext, diagnostics: &mut Vec<Diagnostic>) {
        // A template with no fragments at all is reported by missing-delimiter
        if ctx.template.is_empty() {
            return;
        }

        for name in expected_fragments(ctx.job.kind) {
            if !ctx.template.contains(name) {
                diagnostics.push(
                    Diagnostic::warning(
                        "lint",
                        format!(
                            "{} template has no '{}' fragment; it renders empty",
                            ctx.job.kind, name
                        ),
                    )
                    .at(name),
                );
            }
        }
    }
}
