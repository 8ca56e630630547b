//! Validate phase - runs lints over the classified classes.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::Lint;

use self::lints::{OutputCollisionLint, RelationDeclarationLint, ShapeReferenceLint};
use crate::pipeline::{CompilationContext, Phase};

/// Phase that checks classified classes using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a validate phase with the built-in lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(OutputCollisionLint),
                Box::new(RelationDeclarationLint),
                Box::new(ShapeReferenceLint),
            ],
        }
    }

    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            tracing::trace!(lint = lint.name(), "running lint");
            lint.check(ctx, &mut diagnostics);
        }
        ctx.diagnostics.extend(diagnostics);

        // Warnings are allowed
        if ctx.has_errors() {
            bail!("validation failed with {} error(s)", ctx.error_count());
        }
        Ok(())
    }
}
