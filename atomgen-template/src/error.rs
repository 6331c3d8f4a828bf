use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for template operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read template '{path}'")]
    #[diagnostic(
        code(atomgen::template_io),
        help("check the `template` path of the job in atomgen.toml")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("placeholder '{token}' still unresolved after {passes} substitution passes")]
    #[diagnostic(
        code(atomgen::resolve_limit),
        help(
            "a fragment probably refers to itself through its placeholders; break the cycle or raise `syntax.max_resolve_passes`"
        )
    )]
    ResolveLimit { token: String, passes: usize },
}

impl Error {
    /// Create an I/O error for the given template path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}
