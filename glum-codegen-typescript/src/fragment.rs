//! Per-class generator output.

use puddleglum_codegen::builder::CodeBuilder;

use crate::ast::{ClientClass, Interface};

/// File the aggregate namespace blocks are written to.
pub const INDEX_FILE: &str = "index.ts";

/// Directory per-class client files are written under.
pub const API_DIR: &str = "api";

/// Typed output of one generator for one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentBody {
    /// An interface for the aggregate namespace file.
    Interface(Interface),
    /// A client class with its own file.
    Client(ClientClass),
}

/// What one type generator produced for one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFragment {
    /// Fully-qualified source class.
    pub owner: String,
    /// Output file, relative to the output root and `/`-separated.
    pub filename: String,
    /// Output namespace for aggregate-file fragments.
    pub namespace: Option<String>,
    pub body: FragmentBody,
}

impl GeneratedFragment {
    /// Rendered text of the body.
    pub fn text(&self) -> String {
        let builder = CodeBuilder::typescript();
        match &self.body {
            FragmentBody::Interface(interface) => builder.render(interface).build(),
            FragmentBody::Client(client) => builder.render(client).build(),
        }
    }

    /// A client class without methods renders nothing worth a file.
    pub fn is_empty(&self) -> bool {
        match &self.body {
            FragmentBody::Interface(_) => false,
            FragmentBody::Client(client) => client.methods.is_empty(),
        }
    }
}
