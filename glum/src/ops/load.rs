//! Load operation - configuration, autoload roots and snapshot.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use puddleglum_codegen::{
    GeneratorConfig,
    pipeline::{CompilationContext, Pipeline},
};
use puddleglum_ir::Snapshot;
use puddleglum_manifest::{AutoloadRoot, ConfigFile, load_snapshot};

/// Command-line overrides applied on top of puddleglum.toml.
pub struct LoadOptions<'a> {
    pub config: &'a Path,
    pub output: Option<&'a Path>,
    pub snapshot: Option<&'a Path>,
    pub autoload_dev: bool,
}

/// Everything a run needs, loaded and resolved.
#[derive(Debug)]
pub struct Project {
    pub config_path: PathBuf,
    pub config: GeneratorConfig,
    pub snapshot: Snapshot,
    pub roots: Vec<AutoloadRoot>,
}

/// Read the config file (or defaults), then the roots and the snapshot it
/// points at.
pub fn load(opts: &LoadOptions) -> puddleglum_manifest::Result<Project> {
    let file = ConfigFile::open_or_default(opts.config)?;
    let base = file.base_dir().to_path_buf();
    let config_path = file.path().to_path_buf();

    let mut config = file.into_config();
    config.autoload_dev |= opts.autoload_dev;

    let roots = config.autoload_roots(&base)?;
    let snapshot_path = match opts.snapshot {
        Some(path) => path.to_path_buf(),
        None => base.join(&config.snapshot),
    };
    let snapshot = load_snapshot(&snapshot_path)?;

    let mut generator_config = GeneratorConfig::from_config(&config, &base);
    if let Some(output) = opts.output {
        generator_config.output = output.to_path_buf();
    }

    tracing::debug!(
        config = %config_path.display(),
        snapshot = %snapshot_path.display(),
        roots = roots.len(),
        "loaded project"
    );

    Ok(Project {
        config_path,
        config: generator_config,
        snapshot,
        roots,
    })
}

impl Project {
    /// Run discovery, classification and validation.
    pub fn compile(self) -> Result<CompilationContext> {
        Pipeline::new()
            .run(self.config, self.snapshot, self.roots)
            .wrap_err("Pipeline failed")
    }
}
