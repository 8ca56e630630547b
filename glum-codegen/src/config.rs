//! Immutable generator configuration resolved once per run.

use std::path::{Path, PathBuf};

use puddleglum_ir::ClassKind;
use puddleglum_manifest::Config;

use crate::naming::NamingRules;

/// Everything a run needs to know about its environment.
///
/// Built once from the loaded [`Config`] and threaded by reference through
/// discovery, classification and every generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Output directory, already resolved against the config file location.
    pub output: PathBuf,
    pub autoload_dev: bool,
    /// Middleware a route must carry.
    pub middleware: String,
    /// Source file extension, without the dot.
    pub extension: String,
    /// Ordered ancestor-marker registry; first match wins.
    pub registry: Vec<(String, ClassKind)>,
    pub naming: NamingRules,
}

impl GeneratorConfig {
    pub fn from_config(config: &Config, base: &Path) -> Self {
        Self {
            output: base.join(&config.output),
            autoload_dev: config.autoload_dev,
            middleware: config.middleware.clone(),
            extension: config.extension.trim_start_matches('.').to_string(),
            registry: config
                .generators
                .iter()
                .map(|g| (g.marker.trim_start_matches('\\').to_string(), g.kind))
                .collect(),
            naming: NamingRules {
                root: config.namespace.clone(),
                models_namespace: config.models_namespace.clone(),
                app_namespace: config.app_namespace.clone(),
                strip_segments: config.strip_segments.clone(),
                api_strip_segments: config.api_strip_segments.clone(),
            },
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::from_config(&Config::default(), Path::new(""))
    }
}
