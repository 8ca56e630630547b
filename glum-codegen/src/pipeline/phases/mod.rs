//! Built-in pipeline phases.

mod classify;
mod discover;
pub mod validate;

pub use classify::ClassifyPhase;
pub use discover::DiscoverPhase;
pub use validate::{Lint, ValidatePhase};
