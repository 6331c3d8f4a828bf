//! Single-fragment rendering.

use atomgen_template::{Bindings, Template};

use crate::{WrapperRewriter, keys};

/// Expands fragments of one template for an `{operator, type}` pair.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    template: &'a Template,
    rewriter: &'a WrapperRewriter,
}

impl<'a> Renderer<'a> {
    pub fn new(template: &'a Template, rewriter: &'a WrapperRewriter) -> Self {
        Self { template, rewriter }
    }

    pub fn template(&self) -> &'a Template {
        self.template
    }

    pub fn rewriter(&self) -> &'a WrapperRewriter {
        self.rewriter
    }

    /// Render `fragment` with `{{O}}` and `{{T}}` bound, then strip wrappers.
    ///
    /// Returns `None` when the template has no such fragment.
    pub fn render(&self, fragment: &str, operator: &str, ty: &str) -> Option<String> {
        let body = self.template.get(fragment)?;
        let bindings = Bindings::new()
            .with(keys::OPERATOR, operator)
            .with(keys::TYPE, ty);

        Some(self.rewriter.apply(bindings.apply(body), operator, ty))
    }
}
