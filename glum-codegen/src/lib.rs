//! Discovery, classification and shared code generation utilities for
//! Puddleglum.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`pipeline`] - Discover → classify → validate, with diagnostics
//! - [`resolve`] - Relations, accessors and routes for one class
//! - [`language`] - The `LanguageCodegen` trait output languages implement

pub mod builder;
mod classify;
mod config;
mod discover;
pub mod language;
mod naming;
pub mod pipeline;
pub mod resolve;

pub use classify::{ClassifiedClass, Classifier};
pub use config::GeneratorConfig;
pub use discover::{Discovery, discover};
pub use naming::{NamingRules, PASSTHROUGH_TYPES, is_model_reference};
