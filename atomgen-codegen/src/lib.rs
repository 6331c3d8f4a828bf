//! Template expansion engine for the atomgen generator.
//!
//! Expands a fragment template across every valid `{operator, type}`
//! combination and assembles the generated document.
//!
//! # Module Organization
//!
//! - [`catalog`] - Primitive types grouped by category
//! - [`axis`] - Which operators apply to which categories, in output order
//! - [`rewrite`] - Strips the generic wrapper (`Atomic<Int>` -> `IntA`)
//! - [`render`] - Placeholder expansion plus wrapper rewrite for one fragment
//! - [`generator`] - The source and test-suite axis drivers
//! - [`normalize`] - Rewrites deprecated `++`/`--` idioms in generated tests
//! - [`pipeline`] - Lint → expand → normalize phases with plugin hooks

pub mod axis;
mod buffer;
pub mod catalog;
pub mod generator;
pub mod keys;
pub mod normalize;
pub mod pipeline;
pub mod render;
pub mod rewrite;

pub use buffer::OutputBuffer;
pub use catalog::TypeCatalog;
pub use generator::{SourceGenerator, SuiteGenerator};
pub use normalize::{Normalized, Normalizer};
pub use render::Renderer;
pub use rewrite::WrapperRewriter;
