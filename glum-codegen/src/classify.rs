//! Ancestor-marker classification of discovered classes.

use puddleglum_ir::{ClassKind, DiscoveredClass};

use crate::GeneratorConfig;

/// Ordered registry of (ancestor marker → generator kind) pairs.
#[derive(Debug, Clone)]
pub struct Classifier<'a> {
    registry: &'a [(String, ClassKind)],
}

impl<'a> Classifier<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self {
            registry: &config.registry,
        }
    }

    /// The first kind whose marker appears in the class's ancestry.
    pub fn classify(&self, class: &DiscoveredClass) -> Option<ClassKind> {
        self.registry
            .iter()
            .find(|(marker, _)| class.descends_from(marker))
            .map(|(_, kind)| *kind)
    }
}

/// A discovered class paired with the generator that handles it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedClass {
    pub class: DiscoveredClass,
    pub kind: ClassKind,
}
