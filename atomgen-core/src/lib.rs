//! Core utilities and types for the atomgen generator.
//!
//! This crate provides the primitive type categories shared by the template
//! engine and the configuration layer, plus the regeneration gate that only
//! touches destination files whose content actually changed.

mod file;
mod types;

// File operations
pub use file::{File, Overwrite, WriteResult};
// Fundamental types
pub use types::Category;
