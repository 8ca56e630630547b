//! TypeScript client generator over a finished pipeline run.

use std::path::Path;

use eyre::Result;
use puddleglum_codegen::{
    Classifier,
    language::{GenerateResult, LanguageCodegen, PreviewFile},
    pipeline::CompilationContext,
    resolve::{DeclaredRelations, RouteTable},
};
use puddleglum_core::{GeneratedFile, recreate_dir};
use puddleglum_ir::ClassKind;

use crate::{
    Assembly, GeneratedFragment,
    files::{ApiClassTs, IndexTs, UtilsTs},
    generators::{ControllerGenerator, ModelGenerator, RequestGenerator, TypeGenerator},
};

/// Generates `utils.ts`, `index.ts` and the `api/` client classes.
pub struct Generator<'a> {
    context: &'a CompilationContext,
    assembly: Assembly,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.files()
            .iter()
            .map(|file| PreviewFile {
                path: relative_path(file.as_ref()),
                content: file.render(),
            })
            .collect()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        recreate_dir(output_dir)?;
        tracing::debug!(output = %output_dir.display(), "cleared output directory");

        let mut result = GenerateResult::default();
        for file in self.files() {
            result.written.push(file.write(output_dir)?);
        }

        tracing::info!(
            files = result.written.len(),
            output = %output_dir.display(),
            "generated typescript client"
        );
        Ok(result)
    }
}

impl<'a> Generator<'a> {
    /// Run every type generator over the classified classes, in walk order.
    pub fn from_context(context: &'a CompilationContext) -> Self {
        let fragments = Self::fragments(context);
        tracing::debug!(fragments = fragments.len(), "collected fragments");
        Self {
            context,
            assembly: Assembly::from_fragments(fragments),
        }
    }

    fn fragments(context: &CompilationContext) -> Vec<GeneratedFragment> {
        let config = &context.config;
        let naming = &config.naming;
        let relations = DeclaredRelations::new(&context.snapshot);

        let models = ModelGenerator::new(&context.snapshot, naming, &relations);
        let requests = RequestGenerator::new(&context.snapshot, naming);
        let controllers = ControllerGenerator::new(
            RouteTable::new(&context.snapshot, &config.middleware),
            Classifier::new(config),
            naming,
        );

        context
            .classified
            .iter()
            .filter_map(|classified| {
                let generator: &dyn TypeGenerator = match classified.kind {
                    ClassKind::Model => &models,
                    ClassKind::Request => &requests,
                    ClassKind::Controller => &controllers,
                };
                generator.generate(&classified.class)
            })
            .collect()
    }

    pub fn assembly(&self) -> &Assembly {
        &self.assembly
    }

    fn files(&self) -> Vec<Box<dyn GeneratedFile + '_>> {
        let mut files: Vec<Box<dyn GeneratedFile + '_>> = vec![Box::new(UtilsTs)];

        let has_index = self.assembly.has_index();
        if has_index {
            files.push(Box::new(IndexTs::new(&self.assembly.namespaces)));
        }

        let root = self.context.config.naming.root.as_str();
        for file in &self.assembly.api_files {
            let api = ApiClassTs::new(file);
            files.push(Box::new(if has_index { api.with_index(root) } else { api }));
        }

        files
    }
}

/// Output-relative, `/`-separated path of a generated file.
fn relative_path(file: &dyn GeneratedFile) -> String {
    file.path(Path::new(""))
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
