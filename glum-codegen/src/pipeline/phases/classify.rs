//! Classify phase - assigns a generator kind to each discovered class.

use eyre::Result;

use crate::{
    ClassifiedClass, Classifier,
    pipeline::{CompilationContext, Phase},
};

/// Phase that splits discovered classes into classified and unclassified.
pub struct ClassifyPhase;

impl Phase for ClassifyPhase {
    fn name(&self) -> &'static str {
        "classify"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let classifier = Classifier::new(&ctx.config);
        let mut classified = Vec::new();
        let mut unclassified = Vec::new();

        for class in &ctx.discovered {
            match classifier.classify(class) {
                Some(kind) => {
                    tracing::debug!(class = %class.name, %kind, "classified");
                    classified.push(ClassifiedClass {
                        class: class.clone(),
                        kind,
                    });
                }
                None => {
                    tracing::debug!(class = %class.name, "no generator applies");
                    unclassified.push(class.name.clone());
                }
            }
        }

        ctx.classified = classified;
        ctx.unclassified = unclassified;
        Ok(())
    }
}
