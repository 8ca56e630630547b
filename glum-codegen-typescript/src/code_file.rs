//! Structured TypeScript file generation.

use puddleglum_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use crate::ast::{Banner, Import};

/// A generated TypeScript file: banner, optional header comment lines,
/// imports, then body elements separated by blank lines.
///
/// # Example
///
/// ```ignore
/// let code = CodeFile::new()
///     .import(Import::new("axios").default("axios"))
///     .add(client_class)
///     .render();
/// ```
#[derive(Default)]
pub struct CodeFile {
    pragmas: Vec<String>,
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line emitted right after the banner (e.g. a lint directive).
    pub fn pragma(mut self, line: impl Into<String>) -> Self {
        self.pragmas.push(line.into());
        self
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(&Banner);

        for pragma in &self.pragmas {
            builder.push_line(pragma);
        }
        for import in &self.imports {
            builder.emit(import);
        }

        for fragments in &self.body {
            builder.push_blank();
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}

/// A raw code fragment that implements Renderable.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .lines()
            .map(|line| {
                if line.is_empty() {
                    CodeFragment::Blank
                } else {
                    CodeFragment::line(line)
                }
            })
            .collect()
    }
}
