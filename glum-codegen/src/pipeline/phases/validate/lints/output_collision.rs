//! Lint for classes that generate the same output name.

use std::collections::HashMap;

use puddleglum_ir::ClassKind;

use crate::{
    Classifier,
    pipeline::{CompilationContext, Diagnostic, phases::validate::Lint},
    resolve::RouteTable,
};

/// Errors when two classes map onto one interface reference or one client
/// file, since the second would silently replace the first.
pub struct OutputCollisionLint;

impl Lint for OutputCollisionLint {
    fn name(&self) -> &'static str {
        "output-collision"
    }

    fn check(&self, ctx: &CompilationContext, diagnostics: &mut Vec<Diagnostic>) {
        let naming = &ctx.config.naming;
        let routes = RouteTable::new(&ctx.snapshot, &ctx.config.middleware);
        let classifier = Classifier::new(&ctx.config);
        let mut seen: HashMap<String, &str> = HashMap::new();

        for classified in &ctx.classified {
            let class = &classified.class;
            let target = match classified.kind {
                ClassKind::Model | ClassKind::Request => naming.class_reference(&class.name),
                ClassKind::Controller => {
                    // no routes, no file
                    if routes.routes_for(class, &classifier).is_empty() {
                        continue;
                    }
                    let mut segments = naming.api_path(&class.namespace);
                    segments.push(format!("{}.ts", class.short_name()));
                    segments.join("/")
                }
            };

            if let Some(first) = seen.get(&target) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!("'{}' generates '{}' (conflicts with '{}')", class.name, target, first),
                    )
                    .at(class.name.clone()),
                );
            } else {
                seen.insert(target, &class.name);
            }
        }
    }
}
