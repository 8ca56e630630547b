//! Lint trait for classified classes.

use crate::pipeline::{CompilationContext, Diagnostic};

/// A lint that checks the classified classes for issues.
pub trait Lint {
    fn name(&self) -> &'static str;

    /// Check the context and add any diagnostics.
    fn check(&self, ctx: &CompilationContext, diagnostics: &mut Vec<Diagnostic>);
}
