//! Placeholder keys understood by the generators.
//!
//! Templates spell these as `{{KEY}}`.

/// The operator spelling, or the source type for initializers.
pub const OPERATOR: &str = "O";
/// The target type name.
pub const TYPE: &str = "T";
/// Concatenated operator snippets of a test function.
pub const CONTENT: &str = "CONTENT";
/// The assertion snippet.
pub const ASSERT: &str = "ASSERT";
/// The variable-initialization snippet.
pub const INIT_VARS: &str = "INIT_VARS";
/// Seed literal for the type (`47`, `true`).
pub const DEFAULT: &str = "DEFAULT";
/// Quote wrapped around literals (`"` for strings).
pub const DELIMITER: &str = "DEL";
