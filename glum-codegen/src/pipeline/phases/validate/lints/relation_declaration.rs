//! Lint for malformed relation declarations.

use puddleglum_ir::ClassKind;

use crate::pipeline::{CompilationContext, Diagnostic, phases::validate::Lint};

/// Warns about relation declarations that cannot be rendered as declared.
pub struct RelationDeclarationLint;

impl Lint for RelationDeclarationLint {
    fn name(&self) -> &'static str {
        "relation-declaration"
    }

    fn check(&self, ctx: &CompilationContext, diagnostics: &mut Vec<Diagnostic>) {
        for model in ctx.classes_of(ClassKind::Model) {
            let Some(info) = ctx.snapshot.class(&model.class.name) else {
                continue;
            };
            for decl in info.relations.iter().filter(|d| !d.from_trait) {
                if decl.method.trim().is_empty() {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!("'{}' relation declared without a method, skipped", decl.relation),
                        )
                        .at(model.class.name.clone()),
                    );
                    continue;
                }
                if let Some(related) = &decl.related
                    && ctx.snapshot.class(related).is_none()
                {
                    diagnostics.push(
                        Diagnostic::info(
                            "validate",
                            format!("related model '{}' is not in the class catalog", related),
                        )
                        .at(format!("{}::{}", model.class.name, decl.method)),
                    );
                }
            }
        }
    }
}
