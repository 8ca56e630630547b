//! Check command report data structures.

use std::path::PathBuf;

use puddleglum_codegen::pipeline::Severity;
use puddleglum_ir::ClassKind;

use super::output::{Output, Report};

/// One classified class and where its output lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRow {
    pub kind: ClassKind,
    pub class: String,
    /// Output reference or file; `None` when nothing is emitted.
    pub target: Option<String>,
}

/// Report data from discovery and classification.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    pub classes: Vec<ClassRow>,
    /// Discovered classes no generator handles.
    pub unclassified: usize,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.diagnostic(Severity::Warning, warning);
        }

        for info in &self.infos {
            out.diagnostic(Severity::Info, info);
        }

        if !self.warnings.is_empty() || !self.infos.is_empty() {
            out.newline();
        }

        out.section(&format!("Classes ({})", self.classes.len()));
        let width = self
            .classes
            .iter()
            .map(|row| row.class.len())
            .max()
            .unwrap_or(0);
        for row in &self.classes {
            let target = row.target.as_deref().unwrap_or("(no api routes)");
            out.list_item(&format!(
                "{:<10} {:<width$}  {}",
                row.kind.as_str(),
                row.class,
                target,
                width = width
            ));
        }
        if self.unclassified > 0 {
            out.line(&format!("  ({} unclassified)", self.unclassified));
        }
        out.newline();

        out.line(&format!("✓ {} is valid", self.config_path.display()));
    }
}
