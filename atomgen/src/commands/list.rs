use std::path::PathBuf;

use atomgen_manifest::ManifestFile;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Path to atomgen.toml (built-in jobs are used when it does not exist)
    #[arg(short, long, default_value = "atomgen.toml")]
    pub config: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open_or_default(&self.config).unwrap_or_exit();

        ops::list(file.manifest()).render(&mut TerminalOutput::new());
        Ok(())
    }
}
