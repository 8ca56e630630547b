//! index.ts: the namespace aggregate of model and request interfaces.

use std::path::{Path, PathBuf};

use puddleglum_core::GeneratedFile;

use crate::{INDEX_FILE, ast::Namespace, code_file::CodeFile};

/// One `export namespace` block per output namespace.
pub struct IndexTs<'a> {
    namespaces: &'a [Namespace],
}

impl<'a> IndexTs<'a> {
    pub fn new(namespaces: &'a [Namespace]) -> Self {
        Self { namespaces }
    }
}

impl GeneratedFile for IndexTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(INDEX_FILE)
    }

    fn render(&self) -> String {
        CodeFile::new().add_all(self.namespaces).render()
    }
}
