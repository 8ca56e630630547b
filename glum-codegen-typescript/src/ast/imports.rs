//! TypeScript import builder.

use puddleglum_codegen::builder::{CodeFragment, Renderable};

/// Builder for TypeScript import statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    default: Option<String>,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            named: Vec::new(),
        }
    }

    /// Import a default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    fn statement(&self) -> String {
        match (&self.default, self.named.is_empty()) {
            (Some(def), true) => format!("import {} from \"{}\";", def, self.from),
            (Some(def), false) => format!(
                "import {}, {{ {} }} from \"{}\";",
                def,
                self.named.join(", "),
                self.from
            ),
            (None, false) => format!(
                "import {{ {} }} from \"{}\";",
                self.named.join(", "),
                self.from
            ),
            (None, true) => format!("import \"{}\";", self.from),
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.statement())]
    }
}
