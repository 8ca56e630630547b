//! Per-kind type generators.
//!
//! Each generator turns one classified class into typed IR (an
//! [`Interface`](crate::ast::Interface) or a
//! [`ClientClass`](crate::ast::ClientClass)) wrapped in a
//! [`GeneratedFragment`]. Rendering happens later, in the assembler and the
//! file writers.

mod controller;
mod model;
mod request;

pub use controller::ControllerGenerator;
pub use model::ModelGenerator;
use puddleglum_ir::DiscoveredClass;
pub use request::RequestGenerator;

use crate::GeneratedFragment;

/// Common contract of the model, request and controller generators.
pub trait TypeGenerator {
    /// Generate the fragment for `class`, or `None` when there is nothing to
    /// emit.
    fn generate(&self, class: &DiscoveredClass) -> Option<GeneratedFragment>;
}
