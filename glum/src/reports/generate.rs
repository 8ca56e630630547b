//! Generate command report data structures.

use std::path::PathBuf;

use puddleglum_codegen::pipeline::Severity;
use puddleglum_ir::ClassKind;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Output directory.
    pub output_dir: PathBuf,

    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,

    /// Classified classes per kind.
    pub counts: Vec<(ClassKind, usize)>,

    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files written, relative to the output directory.
    Written(Vec<String>),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.diagnostic(Severity::Warning, warning);
        }

        match &self.result {
            GenerationResult::Written(files) => self.render_written(out, files),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, files: &[String]) {
        let summary: Vec<String> = self
            .counts
            .iter()
            .map(|(kind, count)| format!("{} {}{}", count, kind, if *count == 1 { "" } else { "s" }))
            .collect();
        out.line(&summary.join(", "));
        out.newline();

        out.section(&format!("Files ({})", files.len()));
        for file in files {
            out.added_item(file);
        }
        out.newline();

        out.key_value("Generated", &self.output_dir.display().to_string());
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.line(&file.content);
        }

        out.divider("Summary");
        out.line(&format!(
            "{} files would be generated in {}",
            files.len(),
            self.output_dir.display()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_written_report_names_output() {
        let report = GenerateReport {
            output_dir: PathBuf::from("resources/ts/puddleglum"),
            warnings: vec!["autoload root not found".into()],
            counts: vec![
                (ClassKind::Model, 2),
                (ClassKind::Request, 1),
                (ClassKind::Controller, 0),
            ],
            result: GenerationResult::Written(vec!["utils.ts".into(), "index.ts".into()]),
        };
        let mut out = RecordingOutput::default();

        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "warning: autoload root not found",
                "2 models, 1 request, 0 controllers",
                "",
                "Files (2):",
                "  + utils.ts",
                "  + index.ts",
                "",
                "Generated: resources/ts/puddleglum",
            ]
        );
    }

    #[test]
    fn test_preview_report() {
        let report = GenerateReport {
            output_dir: PathBuf::from("out"),
            warnings: Vec::new(),
            counts: Vec::new(),
            result: GenerationResult::Preview(vec![PreviewFile {
                path: "utils.ts".into(),
                content: "export {};".into(),
            }]),
        };
        let mut out = RecordingOutput::default();

        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "── utils.ts ──",
                "export {};",
                "── Summary ──",
                "1 files would be generated in out",
            ]
        );
    }
}
