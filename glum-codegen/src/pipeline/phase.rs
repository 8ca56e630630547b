//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// A phase in the generation pipeline.
///
/// Phases run in order and read or extend the context. Non-fatal findings
/// are recorded as diagnostics; returning an error aborts the run.
pub trait Phase {
    /// The name of this phase (used in diagnostics).
    fn name(&self) -> &'static str;

    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
