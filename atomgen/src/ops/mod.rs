//! Core operations.
//!
//! Business logic for atomgen commands, separated from argument parsing
//! and output rendering.

pub mod check;
pub mod generate;
pub mod list;

use atomgen_codegen::{TypeCatalog, pipeline::GenerationContext};
use atomgen_manifest::{Job, ManifestFile};
use atomgen_template::Template;
pub use check::check;
use eyre::{Context, Result};
pub use generate::generate;
pub use list::list;

/// Read a job's template and bundle it with the manifest settings.
fn load_job(file: &ManifestFile, job: &Job) -> Result<GenerationContext> {
    let manifest = file.manifest();
    let path = file.resolve(&job.template);

    let template = Template::open(&path, &manifest.syntax.delimiter)
        .wrap_err_with(|| format!("Failed to load template for job '{}'", job.name))?;

    Ok(GenerationContext::new(
        job.clone(),
        template,
        TypeCatalog::new(&manifest.types),
        manifest.syntax.clone(),
    ))
}
