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
pub struct CheckCommand {
    /// Path to puddleglum.toml (defaults are used when it does not exist)
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Introspection snapshot (overrides puddleglum.toml)
    #[arg(short, long)]
    pub snapshot: Option<PathBuf>,

    /// Include dev-only autoload roots
    #[arg(long)]
    pub autoload_dev: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let project = ops::load(&LoadOptions {
            config: &self.config,
            output: None,
            snapshot: self.snapshot.as_deref(),
            autoload_dev: self.autoload_dev,
        })
        .unwrap_or_exit();

        let report = ops::check(project)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
