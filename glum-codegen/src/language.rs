//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use eyre::Result;

/// A language-specific generator over a finished pipeline context.
pub trait LanguageCodegen {
    /// Language identifier (e.g. "typescript")
    fn language(&self) -> &'static str;

    /// Every file a run would write, without touching disk.
    fn preview(&self) -> Vec<PreviewFile>;

    /// Rebuild `output_dir` from scratch and write every file.
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Paths written, in write order.
    pub written: Vec<PathBuf>,
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory, `/`-separated
    pub path: String,
    pub content: String,
}
