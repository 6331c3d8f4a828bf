//! Test pass: one test function per type.

use atomgen_core::Category;
use atomgen_template::Bindings;
use eyre::{Result, WrapErr};
use tracing::debug;

use crate::{
    OutputBuffer, Renderer, TypeCatalog,
    axis::{ASSERT, INIT_VARS, OPERATOR_SECTIONS, TEST},
    keys,
};

/// Indentation of each operator snippet inside a test function.
pub const SNIPPET_INDENT: &str = "        ";

/// Generates the test suite for the wrapper types.
pub struct SuiteGenerator<'a> {
    renderer: Renderer<'a>,
    catalog: &'a TypeCatalog,
    max_passes: usize,
}

impl<'a> SuiteGenerator<'a> {
    pub fn new(renderer: Renderer<'a>, catalog: &'a TypeCatalog, max_passes: usize) -> Self {
        Self {
            renderer,
            catalog,
            max_passes,
        }
    }

    /// Render the whole document.
    ///
    /// Fails only when nested placeholders do not settle within the pass cap.
    pub fn generate(&self) -> Result<String> {
        let template = self.renderer.template();
        let mut out = OutputBuffer::new();
        out.push_str(template.base());
        out.push_str("\n\n");

        let Some(test) = template.get(TEST) else {
            debug!("template has no '{}' fragment, suite is empty", TEST);
            return Ok(out.build());
        };

        for ty in self.catalog.all() {
            let Some(category) = self.catalog.category_of(ty) else {
                continue;
            };

            let bindings = Bindings::new()
                .with(keys::TYPE, ty.as_str())
                .with(keys::CONTENT, self.content(ty, category))
                .with(keys::ASSERT, template.fragment(ASSERT))
                .with(keys::INIT_VARS, template.fragment(INIT_VARS))
                .with(keys::DEFAULT, category.default_literal())
                .with(keys::DELIMITER, category.delimiter_literal());

            let block = bindings
                .resolve(test, self.max_passes)
                .wrap_err_with(|| format!("failed to render test for '{}'", ty))?;
            out.push_block(&self.renderer.rewriter().apply(block, "", ty));
        }

        debug!(blocks = out.block_count(), "test pass complete");
        Ok(out.build())
    }

    /// Operator snippets for one type, in section order.
    ///
    /// Each snippet is indented and ends with its own newline, so a
    /// non-empty body leaves a blank line before the function's closing
    /// brace. Only `{{O}}` and `{{T}}` are bound here; the shared snippets
    /// they reference are filled in when the test function is resolved.
    pub fn content(&self, ty: &str, category: Category) -> String {
        let mut content = String::new();

        for section in &OPERATOR_SECTIONS {
            for rule in section.rules.iter().filter(|rule| rule.applies_to(category)) {
                for operator in rule.operators {
                    let fragment = rule.snippet.fragment();
                    if let Some(snippet) = self.renderer.render(fragment, operator, ty) {
                        content.push_str(SNIPPET_INDENT);
                        content.push_str(&snippet);
                        content.push('\n');
                    }
                }
            }
        }

        content
    }
}
