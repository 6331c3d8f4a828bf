//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a generate run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Manifest that was read, `None` for the built-in jobs.
    pub config_path: Option<PathBuf>,
    pub jobs: Vec<JobReport>,
}

/// Outcome of one job.
#[derive(Debug)]
pub struct JobReport {
    pub name: String,
    pub destination: PathBuf,
    /// Pipeline warnings, already formatted.
    pub warnings: Vec<String>,
    pub status: JobStatus,
}

#[derive(Debug)]
pub enum JobStatus {
    /// The destination was (re)written.
    Written,
    /// The destination already held the generated bytes.
    Unchanged,
    /// Dry run; holds what would have been written.
    Preview(String),
}

impl JobStatus {
    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Written => "written",
            JobStatus::Unchanged => "unchanged",
            JobStatus::Preview(_) => "preview",
        }
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for job in &self.jobs {
            for warning in &job.warnings {
                out.warning(&format!("{}: {}", job.name, warning));
            }
        }

        let previews: Vec<_> = self
            .jobs
            .iter()
            .filter_map(|job| match &job.status {
                JobStatus::Preview(content) => Some((job, content)),
                _ => None,
            })
            .collect();

        if !previews.is_empty() {
            for (job, content) in &previews {
                out.divider(&job.destination.display().to_string());
                out.preformatted(content);
            }
            out.divider("Summary");
            out.preformatted(&format!(
                "{} file{} would be generated",
                previews.len(),
                if previews.len() == 1 { "" } else { "s" }
            ));
            return;
        }

        if let Some(path) = &self.config_path {
            out.key_value("Config", &path.display().to_string());
        }
        for job in &self.jobs {
            let line = format!("{} → {}", job.name, job.destination.display());
            match job.status {
                JobStatus::Written => out.added_item(&line),
                _ => out.list_item(&format!("{} ({})", line, job.status.label())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    fn job(name: &str, status: JobStatus) -> JobReport {
        JobReport {
            name: name.to_string(),
            destination: PathBuf::from(format!("out/{}.swift", name)),
            warnings: Vec::new(),
            status,
        }
    }

    #[test]
    fn test_render_written() {
        let mut atomic = job("atomic", JobStatus::Written);
        atomic.warnings.push("warning: fragment 'prefix' missing".to_string());
        let report = GenerateReport {
            config_path: Some(PathBuf::from("atomgen.toml")),
            jobs: vec![atomic, job("atomic-test", JobStatus::Unchanged)],
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "[stderr] atomic: warning: fragment 'prefix' missing",
                "Config: atomgen.toml",
                "  + atomic → out/atomic.swift",
                "  - atomic-test → out/atomic-test.swift (unchanged)",
            ]
        );
    }

    #[test]
    fn test_render_preview() {
        let report = GenerateReport {
            config_path: None,
            jobs: vec![job("atomic", JobStatus::Preview("// header\n".to_string()))],
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "── out/atomic.swift ──",
                "// header\n",
                "── Summary ──",
                "1 file would be generated",
            ]
        );
    }
}
