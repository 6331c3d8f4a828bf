//! Axis drivers.
//!
//! Each driver walks its sections in a fixed order and appends one rendered
//! fragment per valid `{operator, type}` combination.

mod source;
mod suite;

pub use source::SourceGenerator;
pub use suite::{SNIPPET_INDENT, SuiteGenerator};

use crate::OutputBuffer;

/// Push a rendered fragment; missing fragments contribute nothing.
fn emit(out: &mut OutputBuffer, prefix: &str, rendered: Option<String>) {
    if let Some(block) = rendered {
        out.push_indented(prefix, &block);
    }
}
