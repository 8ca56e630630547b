use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use puddleglum_manifest::CONFIG_FILE;

use super::UnwrapOrExit;
use crate::{
    ops::{self, LoadOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to puddleglum.toml (defaults are used when it does not exist)
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Output directory (overrides puddleglum.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Introspection snapshot (overrides puddleglum.toml)
    #[arg(short, long)]
    pub snapshot: Option<PathBuf>,

    /// Include dev-only autoload roots
    #[arg(long)]
    pub autoload_dev: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let project = ops::load(&LoadOptions {
            config: &self.config,
            output: self.output.as_deref(),
            snapshot: self.snapshot.as_deref(),
            autoload_dev: self.autoload_dev,
        })
        .unwrap_or_exit();

        let report = ops::generate(project, self.dry_run)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
