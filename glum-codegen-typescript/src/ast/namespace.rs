//! `export namespace A.B { ... }` blocks.

use puddleglum_codegen::builder::{CodeFragment, Renderable};

use super::Interface;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    pub name: String,
    pub interfaces: Vec<Interface>,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            interfaces: Vec::new(),
        }
    }
}

impl Renderable for Namespace {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = Vec::new();
        for (i, interface) in self.interfaces.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::blank());
            }
            body.extend(interface.to_fragments());
        }
        vec![CodeFragment::block(
            format!("export namespace {} {{", self.name),
            body,
            Some("}".to_string()),
        )]
    }
}
