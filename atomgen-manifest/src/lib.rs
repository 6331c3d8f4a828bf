//! `atomgen.toml` parsing and validation.
//!
//! The manifest lists the generation jobs (template → destination pairs),
//! the template syntax markers, and the primitive type catalog. Every
//! section is optional; an absent file yields the built-in defaults.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{Job, JobKind, Manifest, ManifestFile, Syntax, TypeTable};
