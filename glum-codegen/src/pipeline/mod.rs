//! Generation pipeline.
//!
//! A [`Pipeline`] runs discover → classify → validate over a
//! [`CompilationContext`], collecting non-fatal findings as
//! [`Diagnostic`]s. Language generators then read the finished context.

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use phases::Lint;
pub use runner::Pipeline;
