//! Generation pipeline for one job.
//!
//! A [`Pipeline`] runs explicit phases over a [`GenerationContext`]:
//!
//! - `lint` checks the template and collects diagnostics
//! - `expand` drives the source or test-suite axis over the catalog
//! - `normalize` rewrites deprecated idioms in the expanded output
//!
//! Plugins receive hooks before and after each phase.
//!
//! # Example
//!
//! ```ignore
//! use atomgen_codegen::pipeline::{GenerationContext, Pipeline, TracingPlugin};
//!
//! let pipeline = Pipeline::new().plugin(TracingPlugin::new());
//! let mut ctx = pipeline.run(GenerationContext::new(job, template, catalog, syntax))?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{}", diag);
//! }
//! let output = ctx.take_output()?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use context::GenerationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::{Plugin, TracingPlugin};
pub use runner::Pipeline;
