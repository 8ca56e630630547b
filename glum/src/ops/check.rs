//! Check operation - discovery and classification without writing.

use eyre::Result;
use puddleglum_codegen::{
    Classifier,
    pipeline::Severity,
    resolve::RouteTable,
};
use puddleglum_codegen_typescript::generators::{ControllerGenerator, TypeGenerator};
use puddleglum_ir::ClassKind;

use super::{Project, generate::messages};
use crate::reports::{CheckReport, ClassRow};

/// Execute the check operation.
///
/// Runs the pipeline and reports where each class would be written.
pub fn check(project: Project) -> Result<CheckReport> {
    let config_path = project.config_path.clone();
    let ctx = project.compile()?;

    let naming = &ctx.config.naming;
    let controllers = ControllerGenerator::new(
        RouteTable::new(&ctx.snapshot, &ctx.config.middleware),
        Classifier::new(&ctx.config),
        naming,
    );

    let classes = ctx
        .classified
        .iter()
        .map(|c| {
            let target = match c.kind {
                ClassKind::Model | ClassKind::Request => {
                    Some(naming.class_reference(&c.class.name))
                }
                ClassKind::Controller => controllers
                    .generate(&c.class)
                    .map(|fragment| fragment.filename),
            };
            ClassRow {
                kind: c.kind,
                class: c.class.name.clone(),
                target,
            }
        })
        .collect();

    Ok(CheckReport {
        config_path,
        classes,
        unclassified: ctx.unclassified.len(),
        warnings: messages(&ctx, Severity::Warning),
        infos: messages(&ctx, Severity::Info),
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::ops::{LoadOptions, load};

    #[test]
    fn test_check_classifies_without_writing() {
        let temp = TempDir::new().unwrap();
        for file in ["app/Models/Tag.php", "app/Http/Controllers/TagController.php"] {
            let path = temp.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, "<?php\n").unwrap();
        }
        fs::write(
            temp.path().join("puddleglum.json"),
            r#"{ "classes": {
                "App\\Models\\Tag": { "ancestors": ["Illuminate\\Database\\Eloquent\\Model"] },
                "App\\Http\\Controllers\\TagController": { "ancestors": ["App\\Http\\Controllers\\Controller"] }
            } }"#,
        )
        .unwrap();
        let project = load(&LoadOptions {
            config: &temp.path().join("puddleglum.toml"),
            output: None,
            snapshot: None,
            autoload_dev: false,
        })
        .unwrap();
        let output = project.config.output.clone();

        let report = check(project).unwrap();

        assert_eq!(
            report.classes,
            vec![
                ClassRow {
                    kind: ClassKind::Controller,
                    class: "App\\Http\\Controllers\\TagController".into(),
                    target: None,
                },
                ClassRow {
                    kind: ClassKind::Model,
                    class: "App\\Models\\Tag".into(),
                    target: Some("Puddleglum.Models.Tag".into()),
                },
            ]
        );
        assert!(report.warnings.is_empty());
        assert!(!output.exists());
    }
}
