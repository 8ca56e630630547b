//! Naming transforms from source namespaces to output names.

use puddleglum_core::to_kebab_case;
use puddleglum_ir::{NAMESPACE_SEPARATOR, split_qualified};

/// Type names that are never model references.
///
/// A shape token starting with one of these passes through verbatim.
pub const PASSTHROUGH_TYPES: &[&str] = &[
    "string",
    "number",
    "boolean",
    "any",
    "unknown",
    "void",
    "null",
    "undefined",
    "Array<",
    "Partial<",
    "Pick<",
    "Omit<",
    "Record<",
    "Readonly<",
    "Exclude<",
    "PaginatedResponse<",
];

/// Returns true when `token` names a model rather than a built-in type.
pub fn is_model_reference(token: &str) -> bool {
    let token = token.trim();
    !token.is_empty() && !PASSTHROUGH_TYPES.iter().any(|p| token.starts_with(p))
}

/// How source namespaces map onto output namespaces and paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingRules {
    /// Output namespace root (e.g. `Puddleglum`).
    pub root: String,
    /// Sub-namespace model references resolve into.
    pub models_namespace: String,
    /// Leading source segment dropped from output names (e.g. `App`).
    pub app_namespace: String,
    /// Segments dropped from output namespaces.
    pub strip_segments: Vec<String>,
    /// Segments dropped from api directory paths.
    pub api_strip_segments: Vec<String>,
}

impl NamingRules {
    /// `App\Http\Requests` → `Puddleglum.Requests`.
    pub fn namespace(&self, source: &str) -> String {
        let mut parts = vec![self.root.as_str()];
        parts.extend(self.segments(source, &self.strip_segments));
        parts.join(".")
    }

    /// `App\Models\Category` → `Puddleglum.Models.Category`.
    pub fn class_reference(&self, qualified: &str) -> String {
        let (namespace, short) = split_qualified(qualified);
        format!("{}.{}", self.namespace(namespace), short)
    }

    /// Bare model token from a shape marker → `Puddleglum.Models.<token>`.
    pub fn model_reference(&self, token: &str) -> String {
        format!("{}.{}.{}", self.root, self.models_namespace, token.trim())
    }

    /// `App\Http\Controllers\Admin\UserSettings` → `["admin", "user-settings"]`.
    pub fn api_path(&self, source: &str) -> Vec<String> {
        self.segments(source, &self.api_strip_segments)
            .into_iter()
            .map(to_kebab_case)
            .collect()
    }

    fn segments<'a>(&self, source: &'a str, strip: &[String]) -> Vec<&'a str> {
        let mut segments: Vec<&str> = source
            .split(NAMESPACE_SEPARATOR)
            .filter(|s| !s.is_empty())
            .collect();
        if segments.first() == Some(&self.app_namespace.as_str()) {
            segments.remove(0);
        }
        segments.retain(|s| !strip.iter().any(|x| x == s));
        segments
    }
}

impl Default for NamingRules {
    fn default() -> Self {
        crate::GeneratorConfig::default().naming
    }
}
