//! Lint for explicit shape markers naming unknown models.

use std::collections::HashSet;

use puddleglum_ir::ClassKind;

use crate::{
    is_model_reference,
    pipeline::{CompilationContext, Diagnostic, phases::validate::Lint},
};

/// Warns when a request or response shape names a model that discovery did
/// not find. The reference is still emitted as written.
pub struct ShapeReferenceLint;

impl Lint for ShapeReferenceLint {
    fn name(&self) -> &'static str {
        "shape-reference"
    }

    fn check(&self, ctx: &CompilationContext, diagnostics: &mut Vec<Diagnostic>) {
        let models: HashSet<&str> = ctx
            .classes_of(ClassKind::Model)
            .map(|m| m.class.short_name())
            .collect();

        for controller in ctx.classes_of(ClassKind::Controller) {
            let Some(info) = ctx.snapshot.class(&controller.class.name) else {
                continue;
            };
            for method in &info.methods {
                let shapes = [&method.request_shape, &method.response_shape];
                for shape in shapes.into_iter().flatten() {
                    for ty in shape.types() {
                        if is_model_reference(ty) && !models.contains(ty.trim()) {
                            diagnostics.push(
                                Diagnostic::warning(
                                    "validate",
                                    format!("shape references unknown model '{}'", ty.trim()),
                                )
                                .at(format!("{}::{}", controller.class.name, method.name)),
                            );
                        }
                    }
                }
            }
        }
    }
}
