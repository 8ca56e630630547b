//! Generate operation - TypeScript client generation.

use std::path::Path;

use eyre::{Context, Result};
use puddleglum_codegen::{
    language::LanguageCodegen,
    pipeline::{CompilationContext, Severity},
};
use puddleglum_codegen_typescript::Generator;
use puddleglum_ir::ClassKind;

use super::Project;
use crate::reports::{GenerateReport, GenerationResult, PreviewFile};

/// Execute the generate operation.
///
/// Runs the pipeline, then either previews or writes every file.
pub fn generate(project: Project, dry_run: bool) -> Result<GenerateReport> {
    let ctx = project.compile()?;
    let generator = Generator::from_context(&ctx);
    let output_dir = ctx.config.output.clone();

    let result = if dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(files)
    } else {
        let written = generator
            .generate(&output_dir)
            .wrap_err("Failed to generate code")?;
        GenerationResult::Written(
            written
                .written
                .iter()
                .map(|path| display_relative(path, &output_dir))
                .collect(),
        )
    };

    Ok(GenerateReport {
        output_dir,
        warnings: messages(&ctx, Severity::Warning),
        counts: counts(&ctx),
        result,
    })
}

pub(crate) fn messages(ctx: &CompilationContext, severity: Severity) -> Vec<String> {
    ctx.diagnostics
        .iter()
        .filter(|d| d.severity == severity)
        .map(|d| match &d.location {
            Some(loc) => format!("{}\n  --> {}", d.message, loc),
            None => d.message.clone(),
        })
        .collect()
}

fn counts(ctx: &CompilationContext) -> Vec<(ClassKind, usize)> {
    [ClassKind::Model, ClassKind::Request, ClassKind::Controller]
        .into_iter()
        .map(|kind| (kind, ctx.classes_of(kind).count()))
        .collect()
}

fn display_relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::ops::{LoadOptions, load};

    fn project(temp: &TempDir) -> Project {
        let model = temp.path().join("app/Models/Tag.php");
        fs::create_dir_all(model.parent().unwrap()).unwrap();
        fs::write(&model, "<?php\n").unwrap();
        fs::write(
            temp.path().join("puddleglum.json"),
            r#"{
                "classes": { "App\\Models\\Tag": { "ancestors": ["Illuminate\\Database\\Eloquent\\Model"] } },
                "tables": { "tags": [{ "name": "id", "type_name": "int" }] }
            }"#,
        )
        .unwrap();

        load(&LoadOptions {
            config: &temp.path().join("puddleglum.toml"),
            output: None,
            snapshot: None,
            autoload_dev: false,
        })
        .unwrap()
    }

    #[test]
    fn test_generate_writes_files() {
        let temp = TempDir::new().unwrap();

        let report = generate(project(&temp), false).unwrap();

        assert_eq!(report.output_dir, temp.path().join("resources/ts/puddleglum"));
        assert_eq!(report.counts[0], (ClassKind::Model, 1));
        match report.result {
            GenerationResult::Written(files) => assert_eq!(files, ["utils.ts", "index.ts"]),
            GenerationResult::Preview(_) => panic!("expected written files"),
        }
        assert!(report.output_dir.join("index.ts").exists());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();

        let report = generate(project(&temp), true).unwrap();

        match report.result {
            GenerationResult::Preview(files) => {
                assert_eq!(files.len(), 2);
                assert!(files[1].content.contains("export interface Tag {"));
            }
            GenerationResult::Written(_) => panic!("expected a preview"),
        }
        assert!(!report.output_dir.exists());
    }

    #[test]
    fn test_display_relative() {
        assert_eq!(
            display_relative(Path::new("/out/api/shop/A.ts"), Path::new("/out")),
            "api/shop/A.ts"
        );
    }
}
