//! Configuration, snapshot and composer.json loading for Puddleglum.
//!
//! Every load failure is a [`miette::Diagnostic`] carrying the offending
//! source, so the binary can render it with a label at the right place.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod autoload;
mod composer;
mod config;
mod error;
mod snapshot;

pub use autoload::AutoloadRoot;
pub use composer::{Composer, ComposerAutoload};
pub use config::{AutoloadPath, CONFIG_FILE, Config, ConfigFile, GeneratorEntry};
pub use error::{Error, Result};
pub use snapshot::{load_snapshot, parse_snapshot};
