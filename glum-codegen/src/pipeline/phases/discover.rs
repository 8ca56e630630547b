//! Discover phase - walks the autoload roots.

use eyre::Result;

use crate::{
    discover,
    pipeline::{CompilationContext, Diagnostic, Phase},
};

/// Phase that fills [`CompilationContext::discovered`].
pub struct DiscoverPhase;

impl Phase for DiscoverPhase {
    fn name(&self) -> &'static str {
        "discover"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let discovery = discover(&ctx.roots, &ctx.snapshot, &ctx.config.extension);

        for dir in &discovery.missing_roots {
            ctx.add_diagnostic(
                Diagnostic::warning(self.name(), "autoload directory does not exist")
                    .at(dir.display().to_string()),
            );
        }

        tracing::debug!(classes = discovery.classes.len(), "discovery finished");
        ctx.discovered = discovery.classes;
        Ok(())
    }
}
