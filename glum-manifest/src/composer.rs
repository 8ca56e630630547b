use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{AutoloadPath, Error, Result};

/// The parts of composer.json that describe autoload roots.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Composer {
    #[serde(default)]
    pub autoload: ComposerAutoload,
    #[serde(default, rename = "autoload-dev")]
    pub autoload_dev: ComposerAutoload,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComposerAutoload {
    #[serde(default, rename = "psr-4")]
    pub psr4: IndexMap<String, AutoloadPath>,
}

impl Composer {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::json(e, content, filename))
    }
}
