//! Generate operation - expand every job and write changed outputs.

use atomgen_codegen::pipeline::{Pipeline, TracingPlugin};
use atomgen_core::{File, Overwrite, WriteResult};
use atomgen_manifest::{Job, ManifestFile};
use eyre::{Context, Result, eyre};
use tracing::info;

use super::load_job;
use crate::reports::{GenerateReport, JobReport, JobStatus};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Print instead of writing.
    pub dry_run: bool,
    /// Write even when the destination already matches.
    pub force: bool,
    /// Restrict the run to one job.
    pub job: Option<&'a str>,
}

/// Execute the generate operation.
///
/// Every selected job is expanded before anything is written, so a bad
/// template in one job leaves every destination untouched.
pub fn generate(file: &ManifestFile, opts: GenerateOptions) -> Result<GenerateReport> {
    let manifest = file.manifest();
    let jobs: Vec<&Job> = match opts.job {
        Some(name) => vec![
            manifest
                .job(name)
                .ok_or_else(|| eyre!("No job named '{}'", name))?,
        ],
        None => manifest.jobs.iter().collect(),
    };

    let pipeline = Pipeline::new().plugin(TracingPlugin::new());
    let mut expanded = Vec::with_capacity(jobs.len());
    for job in jobs {
        let ctx = load_job(file, job)?;
        let mut ctx = pipeline
            .run(ctx)
            .wrap_err_with(|| format!("Job '{}' failed", job.name))?;

        let warnings: Vec<String> = ctx.warnings().map(|d| d.to_string()).collect();
        let output = ctx.take_output()?;
        expanded.push((job, warnings, output));
    }

    let mut reports = Vec::with_capacity(expanded.len());
    for (job, warnings, output) in expanded {
        let destination = file.resolve(&job.destination);

        let status = if opts.dry_run {
            JobStatus::Preview(output)
        } else {
            let overwrite = if opts.force {
                Overwrite::Always
            } else {
                Overwrite::IfChanged
            };
            match File::new(&destination, output).overwrite(overwrite).write()? {
                WriteResult::Written => JobStatus::Written,
                WriteResult::Unchanged => JobStatus::Unchanged,
            }
        };
        info!(job = %job.name, status = status.label(), "job finished");

        reports.push(JobReport {
            name: job.name.clone(),
            destination,
            warnings,
            status,
        });
    }

    Ok(GenerateReport {
        config_path: file.path().map(|p| p.to_path_buf()),
        jobs: reports,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::ops::testing::project;

    fn opts(dry_run: bool, job: Option<&str>) -> GenerateOptions<'_> {
        GenerateOptions {
            dry_run,
            force: false,
            job,
        }
    }

    #[test]
    fn test_generate_writes_both_jobs() {
        let (temp, file) = project();

        let report = generate(&file, opts(false, None)).unwrap();
        assert_eq!(report.jobs.len(), 2);
        assert!(report.jobs.iter().all(|j| matches!(j.status, JobStatus::Written)));

        let source = fs::read_to_string(temp.path().join("Source/atomic.swift")).unwrap();
        assert_eq!(
            source,
            "// header\n\n\
             public typealias IntA = Atomic<Int>\n\
             public typealias BoolA = Atomic<Bool>\n\n\n\
             func +(lhs: IntA) -> IntA\n\
             func -(lhs: IntA) -> IntA\n\
             func *(lhs: IntA) -> IntA\n\
             func /(lhs: IntA) -> IntA\n\
             func %(lhs: IntA) -> IntA\n\
             func <<(lhs: IntA) -> IntA\n\
             func >>(lhs: IntA) -> IntA\n\
             func ^(lhs: IntA) -> IntA\n\
             func &(lhs: IntA) -> IntA\n\
             func &+(lhs: IntA) -> IntA\n\
             func &-(lhs: IntA) -> IntA\n\
             func &*(lhs: IntA) -> IntA\n"
        );

        // Postfix blocks are normalized away, leaving their indentation
        let tests = fs::read_to_string(temp.path().join("Tests/atomic-test.swift")).unwrap();
        assert_eq!(
            tests,
            "import XCTest\n\n\
             func testAtomicInt() {\n        \n        \n\n}\n\
             func testAtomicBool() {\n\n}\n"
        );
    }

    #[test]
    fn test_second_run_is_unchanged() {
        let (_temp, file) = project();

        generate(&file, opts(false, None)).unwrap();
        let report = generate(&file, opts(false, None)).unwrap();

        assert!(report.jobs.iter().all(|j| matches!(j.status, JobStatus::Unchanged)));
    }

    #[test]
    fn test_force_rewrites_unchanged() {
        let (_temp, file) = project();
        generate(&file, opts(false, None)).unwrap();

        let forced = GenerateOptions {
            dry_run: false,
            force: true,
            job: Some("atomic"),
        };
        let report = generate(&file, forced).unwrap();
        assert!(matches!(report.jobs[0].status, JobStatus::Written));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let (temp, file) = project();

        let report = generate(&file, opts(true, Some("atomic"))).unwrap();
        assert_eq!(report.jobs.len(), 1);
        let previewed = matches!(
            &report.jobs[0].status,
            JobStatus::Preview(text) if text.starts_with("// header")
        );
        assert!(previewed);
        assert!(!temp.path().join("Source").exists());
    }

    #[test]
    fn test_unknown_job() {
        let (_temp, file) = project();

        let err = generate(&file, opts(false, Some("nope"))).unwrap_err();
        assert!(err.to_string().contains("No job named 'nope'"));
    }

    #[test]
    fn test_missing_template_writes_nothing() {
        let (temp, file) = project();
        fs::remove_file(temp.path().join("gen/atomic-test-template.swift")).unwrap();

        let err = generate(&file, opts(false, None)).unwrap_err();
        assert!(format!("{:#}", err).contains("atomic-test-template.swift"));
        assert!(!temp.path().join("Source/atomic.swift").exists());
    }
}
