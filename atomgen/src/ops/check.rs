//! Check operation - lint every job's template.

use atomgen_codegen::pipeline::{Diagnostic, Pipeline, TracingPlugin};
use atomgen_manifest::ManifestFile;
use eyre::{Context, Result};

use super::load_job;
use crate::reports::{CheckReport, JobDiagnostics};

/// Execute the check operation.
///
/// A template that cannot be read is reported as an error diagnostic for
/// its job rather than stopping the whole check.
pub fn check(file: &ManifestFile) -> Result<CheckReport> {
    let pipeline = Pipeline::lint_only().plugin(TracingPlugin::new());
    let mut jobs = Vec::new();

    for job in &file.manifest().jobs {
        let diagnostics = match load_job(file, job) {
            Ok(ctx) => {
                pipeline
                    .run(ctx)
                    .wrap_err_with(|| format!("Checking job '{}' failed", job.name))?
                    .diagnostics
            }
            Err(err) => vec![Diagnostic::error("load", format!("{:#}", err))],
        };

        jobs.push(JobDiagnostics {
            name: job.name.clone(),
            template: file.resolve(&job.template),
            diagnostics,
        });
    }

    Ok(CheckReport {
        config_path: file.path().map(|p| p.to_path_buf()),
        jobs,
    })
}
