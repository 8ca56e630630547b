//! Discovered classes and the closed set of generator kinds.

use serde::Deserialize;

use crate::ClassInfo;

/// Separator between namespace segments in qualified class names.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Split `App\Models\User` into (`App\Models`, `User`).
///
/// A class in the global namespace has an empty namespace.
pub fn split_qualified(name: &str) -> (&str, &str) {
    let name = name.trim_start_matches(NAMESPACE_SEPARATOR);
    match name.rfind(NAMESPACE_SEPARATOR) {
        Some(idx) => (&name[..idx], &name[idx + 1..]),
        None => ("", name),
    }
}

/// Which generator handles a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    /// Data model backed by a table.
    Model,
    /// Validated request carrying field rules.
    Request,
    /// HTTP controller bound to routes.
    Controller,
}

impl ClassKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassKind::Model => "model",
            ClassKind::Request => "request",
            ClassKind::Controller => "controller",
        }
    }
}

impl std::fmt::Display for ClassKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A class found under one of the autoload roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredClass {
    /// Fully-qualified name without a leading separator.
    pub name: String,
    /// Namespace part of [`name`](Self::name).
    pub namespace: String,
    pub is_abstract: bool,
    /// Ancestry chain, nearest first.
    pub ancestors: Vec<String>,
}

impl DiscoveredClass {
    /// Build a discovered class from its catalog entry.
    pub fn new(name: &str, info: &ClassInfo) -> Self {
        let name = name.trim_start_matches(NAMESPACE_SEPARATOR);
        let (namespace, _) = split_qualified(name);
        Self {
            name: name.to_string(),
            namespace: namespace.to_string(),
            is_abstract: info.is_abstract,
            ancestors: info.ancestors.clone(),
        }
    }

    /// The unqualified class name.
    pub fn short_name(&self) -> &str {
        split_qualified(&self.name).1
    }

    /// Whether `marker` appears anywhere in the ancestry chain.
    pub fn descends_from(&self, marker: &str) -> bool {
        let marker = marker.trim_start_matches(NAMESPACE_SEPARATOR);
        self.ancestors
            .iter()
            .any(|a| a.trim_start_matches(NAMESPACE_SEPARATOR) == marker)
    }
}
