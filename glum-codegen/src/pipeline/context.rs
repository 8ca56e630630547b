//! Compilation context passed through pipeline phases.

use puddleglum_ir::{ClassKind, DiscoveredClass, Snapshot};
use puddleglum_manifest::AutoloadRoot;

use super::diagnostic::{Diagnostic, Severity};
use crate::{ClassifiedClass, GeneratorConfig};

/// State of one run, accumulated phase by phase.
#[derive(Debug)]
pub struct CompilationContext {
    pub config: GeneratorConfig,
    pub snapshot: Snapshot,
    pub roots: Vec<AutoloadRoot>,
    /// Concrete classes found by discovery, in walk order.
    pub discovered: Vec<DiscoveredClass>,
    /// Discovered classes a generator handles, in walk order.
    pub classified: Vec<ClassifiedClass>,
    /// Discovered classes no generator handles.
    pub unclassified: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(config: GeneratorConfig, snapshot: Snapshot, roots: Vec<AutoloadRoot>) -> Self {
        Self {
            config,
            snapshot,
            roots,
            discovered: Vec::new(),
            classified: Vec::new(),
            unclassified: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Classified classes of one kind, in walk order.
    pub fn classes_of(&self, kind: ClassKind) -> impl Iterator<Item = &ClassifiedClass> {
        self.classified.iter().filter(move |c| c.kind == kind)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .count()
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_diagnostics() {
        let mut ctx =
            CompilationContext::new(GeneratorConfig::default(), Snapshot::default(), Vec::new());

        ctx.add_warning("discover", "missing root");
        ctx.add_diagnostic(Diagnostic::error("validate", "broken"));

        assert!(ctx.has_errors());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warning_count(), 1);
        assert_eq!(ctx.warnings().count(), 1);
    }
}
