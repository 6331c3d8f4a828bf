//! Check command report data structures.

use std::path::PathBuf;

use atomgen_codegen::pipeline::{Diagnostic, Severity};
use serde::{Serialize, ser::SerializeStruct};

use super::output::{Output, Report};

/// Report data from template checks.
#[derive(Debug)]
pub struct CheckReport {
    /// Manifest that was read, `None` for the built-in jobs.
    pub config_path: Option<PathBuf>,
    pub jobs: Vec<JobDiagnostics>,
}

/// Diagnostics for one job's template.
#[derive(Debug, Serialize)]
pub struct JobDiagnostics {
    pub name: String,
    pub template: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.jobs
            .iter()
            .flat_map(|job| &job.diagnostics)
            .all(|d| !d.severity.is_error())
    }
}

impl Serialize for CheckReport {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CheckReport", 3)?;
        state.serialize_field("config", &self.config_path)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("jobs", &self.jobs)?;
        state.end()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        let mut reported = false;

        for job in &self.jobs {
            for diag in &job.diagnostics {
                let mut msg = format!("{}: {}", job.name, diag);
                if diag.severity == Severity::Info {
                    out.preformatted(&msg);
                    continue;
                }
                msg.push_str(&format!("\n  --> {}", job.template.display()));
                out.warning(&msg);
                reported = true;
            }
        }

        if reported {
            out.newline();
        }

        if self.is_valid() {
            let source = match &self.config_path {
                Some(path) => path.display().to_string(),
                None => "built-in jobs".to_string(),
            };
            out.preformatted(&format!("✓ {} is valid", source));
        }
    }
}
