use std::path::PathBuf;

use atomgen_manifest::ManifestFile;
use clap::Args;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to atomgen.toml (built-in jobs are used when it does not exist)
    #[arg(short, long, default_value = "atomgen.toml")]
    pub config: PathBuf,

    /// Print diagnostics as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open_or_default(&self.config).unwrap_or_exit();
        let report = ops::check(&file)?;

        if self.json {
            let json =
                serde_json::to_string_pretty(&report).wrap_err("Failed to serialize report")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
