use std::path::PathBuf;

use atomgen_manifest::ManifestFile;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, generate::GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to atomgen.toml (built-in jobs are used when it does not exist)
    #[arg(short, long, default_value = "atomgen.toml")]
    pub config: PathBuf,

    /// Print generated output without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Write outputs even when they are unchanged
    #[arg(long)]
    pub force: bool,

    /// Only run the named job
    #[arg(short, long)]
    pub job: Option<String>,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open_or_default(&self.config).unwrap_or_exit();

        let report = ops::generate(
            &file,
            GenerateOptions {
                dry_run: self.dry_run,
                force: self.force,
                job: self.job.as_deref(),
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
