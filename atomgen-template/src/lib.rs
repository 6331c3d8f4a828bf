//! Fragment templates for the atomgen generator.
//!
//! A template document is plain text split into named fragments by a
//! delimiter line (`// TEMPLATE: name` by default). Fragments contain
//! `{{KEY}}` placeholder tokens that are filled from [`Bindings`].
//!
//! ```
//! use atomgen_template::{Bindings, Template};
//!
//! let template = Template::parse("// header\n// TEMPLATE: alias\ntypealias {{O}} = {{T}}");
//! let bindings = Bindings::new().with("O", "IntA").with("T", "Int");
//!
//! assert_eq!(template.base(), "// header");
//! assert_eq!(template.expand("alias", &bindings), "typealias IntA = Int");
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod placeholder;
mod template;

pub use error::{Error, Result};
pub use placeholder::{Bindings, token, tokens};
pub use template::{BASE, DEFAULT_DELIMITER, Template};
