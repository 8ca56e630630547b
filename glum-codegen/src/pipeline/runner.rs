//! Pipeline orchestrator.

use eyre::Result;
use puddleglum_ir::Snapshot;
use puddleglum_manifest::AutoloadRoot;

use super::{
    CompilationContext, Phase,
    phases::{ClassifyPhase, DiscoverPhase, ValidatePhase},
};
use crate::GeneratorConfig;

/// Runs discovery, classification and validation.
///
/// # Example
///
/// ```ignore
/// let ctx = Pipeline::new().run(config, snapshot, roots)?;
/// let generator = Generator::from_context(&ctx);
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
        }
    }

    /// Replace the built-in validate phase (e.g. to add lints).
    pub fn validate(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    /// Run the phases in order; the first fatal error aborts the run.
    pub fn run(
        &self,
        config: GeneratorConfig,
        snapshot: Snapshot,
        roots: Vec<AutoloadRoot>,
    ) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(config, snapshot, roots);

        let phases: [&dyn Phase; 3] = [&DiscoverPhase, &ClassifyPhase, &self.validate];
        for phase in phases {
            tracing::debug!(phase = phase.name(), "running phase");
            phase.run(&mut ctx)?;
        }

        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use puddleglum_ir::ClassKind;
    use tempfile::TempDir;

    use super::*;
    use crate::pipeline::{Diagnostic, Lint};

    fn snapshot() -> Snapshot {
        serde_json::from_str(
            r#"{ "classes": {
                "App\\Models\\User": { "ancestors": ["Illuminate\\Database\\Eloquent\\Model"] },
                "App\\Support\\Money": {}
            } }"#,
        )
        .unwrap()
    }

    fn roots(temp: &TempDir) -> Vec<AutoloadRoot> {
        let app = temp.path().join("app");
        fs::create_dir_all(app.join("Models")).unwrap();
        fs::create_dir_all(app.join("Support")).unwrap();
        fs::write(app.join("Models/User.php"), "").unwrap();
        fs::write(app.join("Support/Money.php"), "").unwrap();
        vec![
            AutoloadRoot {
                prefix: "App".into(),
                dir: app,
                dev: false,
            },
            AutoloadRoot {
                prefix: "Tests".into(),
                dir: temp.path().join("tests"),
                dev: true,
            },
        ]
    }

    #[test]
    fn test_pipeline_discovers_and_classifies() {
        let temp = TempDir::new().unwrap();

        let ctx = Pipeline::new()
            .run(GeneratorConfig::default(), snapshot(), roots(&temp))
            .unwrap();

        assert_eq!(ctx.discovered.len(), 2);
        assert_eq!(ctx.classified.len(), 1);
        assert_eq!(ctx.classified[0].kind, ClassKind::Model);
        assert_eq!(ctx.unclassified, ["App\\Support\\Money"]);
        assert_eq!(ctx.warning_count(), 1);
    }

    struct Deny;

    impl Lint for Deny {
        fn name(&self) -> &'static str {
            "deny"
        }

        fn check(&self, _ctx: &CompilationContext, diagnostics: &mut Vec<Diagnostic>) {
            diagnostics.push(Diagnostic::error("validate", "denied"));
        }
    }

    #[test]
    fn test_lint_errors_abort() {
        let temp = TempDir::new().unwrap();

        let err = Pipeline::new()
            .validate(ValidatePhase::empty().with_lint(Deny))
            .run(GeneratorConfig::default(), snapshot(), roots(&temp))
            .unwrap_err();

        assert!(err.to_string().contains("1 error"));
    }

    #[test]
    fn test_colliding_models_abort() {
        let temp = TempDir::new().unwrap();
        let mut roots = roots(&temp);
        let nested = roots[0].dir.join("Http/Models");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("User.php"), "").unwrap();
        roots.truncate(1);

        let mut snapshot = snapshot();
        let user = snapshot.class("App\\Models\\User").unwrap().clone();
        snapshot.classes.insert("App\\Http\\Models\\User".into(), user);

        let err = Pipeline::new()
            .run(GeneratorConfig::default(), snapshot, roots)
            .unwrap_err();

        assert_eq!(err.to_string(), "validation failed with 1 error(s)");
    }
}
