//! Source pass: aliases, initializers and operator overloads.

use tracing::debug;

use super::emit;
use crate::{
    OutputBuffer, Renderer, TypeCatalog,
    axis::{
        INITIALIZE_BODY, INITIALIZE_FOOT, INITIALIZE_HEAD, OPERATOR_SECTIONS, Section, TYPEALIAS,
    },
};

/// Generates the wrapper source file.
pub struct SourceGenerator<'a> {
    renderer: Renderer<'a>,
    catalog: &'a TypeCatalog,
}

impl<'a> SourceGenerator<'a> {
    pub fn new(renderer: Renderer<'a>, catalog: &'a TypeCatalog) -> Self {
        Self { renderer, catalog }
    }

    /// Render the whole document.
    pub fn generate(&self) -> String {
        let mut out = OutputBuffer::new();
        out.push_str(self.renderer.template().base());
        out.push_str("\n\n");

        self.type_aliases(&mut out);
        out.blank();

        self.initializers(&mut out);
        out.blank();

        for section in &OPERATOR_SECTIONS {
            self.operators(section, &mut out);
        }

        debug!(blocks = out.block_count(), "source pass complete");
        out.build()
    }

    /// One alias per type. The operator binding is the alias itself, so the
    /// wrapper stays spelled out.
    fn type_aliases(&self, out: &mut OutputBuffer) {
        for ty in self.catalog.all() {
            let alias = self.renderer.rewriter().alias(ty);
            emit(out, "", self.renderer.render(TYPEALIAS, &alias, ty));
        }
    }

    /// An extension per type with an initializer from its own wrapper and,
    /// for numbers, from the wrapper of every other number type.
    fn initializers(&self, out: &mut OutputBuffer) {
        let number = self.catalog.number();

        for ty in self.catalog.all() {
            emit(out, "", self.renderer.render(INITIALIZE_HEAD, "", ty));
            emit(out, "\t", self.renderer.render(INITIALIZE_BODY, ty, ty));

            if number.contains(ty) {
                for source in number.iter().filter(|source| *source != ty) {
                    emit(out, "\t", self.renderer.render(INITIALIZE_BODY, source, ty));
                }
            }

            emit(out, "", self.renderer.render(INITIALIZE_FOOT, "", ty));
        }
    }

    /// Operators outer, types inner.
    fn operators(&self, section: &Section, out: &mut OutputBuffer) {
        let before = out.block_count();

        for rule in section.rules {
            let types = self.catalog.select(rule.categories);
            for operator in rule.operators {
                for ty in &types {
                    emit(out, "", self.renderer.render(section.fragment, operator, ty));
                }
            }
        }

        debug!(
            section = section.name,
            blocks = out.block_count() - before,
            "expanded section"
        );
    }
}
