//! Built-in pipeline phases.
//!
//! - [`LintPhase`] - checks the template and collects diagnostics
//! - [`ExpandPhase`] - renders the job's template across the type catalog
//! - [`NormalizePhase`] - rewrites deprecated idioms in the output

mod check;
mod expand;
mod normalize;

pub use check::{
    DuplicateFragmentLint, Lint, LintInfo, LintPhase, MissingDelimiterLint, MissingFragmentLint,
    UnclosedWrapperLint,
};
pub use expand::ExpandPhase;
pub use normalize::NormalizePhase;
