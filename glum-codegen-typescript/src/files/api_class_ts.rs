//! api/<path>/<Class>.ts: one client class per controller.

use std::path::{Path, PathBuf};

use puddleglum_core::GeneratedFile;

use crate::{
    ApiFile, INDEX_FILE,
    ast::Import,
    code_file::CodeFile,
};

const ESLINT_PRAGMA: &str = "/* eslint-disable @typescript-eslint/no-unused-vars */";

/// A controller's client class file.
pub struct ApiClassTs<'a> {
    file: &'a ApiFile,
    /// Root namespace imported from index.ts, when index.ts is written.
    index_root: Option<&'a str>,
}

impl<'a> ApiClassTs<'a> {
    pub fn new(file: &'a ApiFile) -> Self {
        Self {
            file,
            index_root: None,
        }
    }

    /// Import the root namespace (e.g. `Puddleglum`) from the aggregate file.
    pub fn with_index(mut self, root: &'a str) -> Self {
        self.index_root = Some(root);
        self
    }

    fn relative(&self, module: &str) -> String {
        match self.file.depth() {
            0 => format!("./{}", module),
            depth => format!("{}{}", "../".repeat(depth), module),
        }
    }
}

impl GeneratedFile for ApiClassTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        self.file
            .filename
            .split('/')
            .fold(base.to_path_buf(), |path, segment| path.join(segment))
    }

    fn render(&self) -> String {
        let mut code = CodeFile::new()
            .pragma(ESLINT_PRAGMA)
            .import(Import::new("axios").default("axios").named("AxiosRequestConfig"))
            .import(
                Import::new(self.relative("utils"))
                    .named("transformToQueryString")
                    .named("PaginatedResponse"),
            );

        if let Some(root) = self.index_root {
            let root = root.split('.').next().unwrap_or(root);
            let index = INDEX_FILE.trim_end_matches(".ts");
            code = code.import(Import::new(self.relative(index)).named(root));
        }

        code.add(&self.file.client).render()
    }
}
