//! Built-in template lints.

mod duplicate_fragment;
mod missing_delimiter;
mod missing_fragment;
mod unclosed_wrapper;

pub use duplicate_fragment::DuplicateFragmentLint;
pub use missing_delimiter::MissingDelimiterLint;
pub use missing_fragment::MissingFragmentLint;
pub use unclosed_wrapper::UnclosedWrapperLint;

#[cfg(test)]
use atomgen_manifest::JobKind;

#[cfg(test)]
use crate::pipeline::GenerationContext;

#[cfg(test)]
fn context(doc: &str, kind: JobKind) -> GenerationContext {
    use atomgen_manifest::{Job, Syntax};
    use atomgen_template::Template;

    GenerationContext::new(
        Job::new("job", "template.swift", "out.swift", kind),
        Template::parse(doc),
        crate::TypeCatalog::swift(),
        Syntax::default(),
    )
}
