//! Explicit request/response shape markers.

use indexmap::IndexMap;
use serde::{Deserialize, de::IgnoredAny};

/// Type every malformed marker value degrades to.
pub const FALLBACK_TYPE: &str = "any";

/// A shape marker attached to a controller method: either a single type
/// expression or an ordered mapping of field name to type.
///
/// Markers of any other form deserialize as [`Shape::Other`] so a stray
/// annotation never fails the snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Shape {
    Type(String),
    Fields(IndexMap<String, ShapeValue>),
    Other(IgnoredAny),
}

/// The value side of a mapping entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ShapeValue {
    Type(String),
    Other(IgnoredAny),
}

impl ShapeValue {
    /// The type expression, or [`FALLBACK_TYPE`] for a non-string value.
    pub fn as_type(&self) -> &str {
        match self {
            ShapeValue::Type(ty) => ty,
            ShapeValue::Other(_) => FALLBACK_TYPE,
        }
    }
}

impl From<&str> for ShapeValue {
    fn from(ty: &str) -> Self {
        ShapeValue::Type(ty.to_string())
    }
}

impl Shape {
    /// Fields of a mapping shape, in declaration order. Other shapes have none.
    pub fn fields(&self) -> Vec<ShapeField> {
        match self {
            Shape::Type(_) | Shape::Other(_) => Vec::new(),
            Shape::Fields(fields) => fields
                .iter()
                .map(|(key, value)| ShapeField::parse(key, value.as_type()))
                .collect(),
        }
    }

    /// Every type expression the marker names.
    pub fn types(&self) -> Vec<&str> {
        match self {
            Shape::Type(ty) => vec![ty.as_str()],
            Shape::Fields(fields) => fields.values().map(ShapeValue::as_type).collect(),
            Shape::Other(_) => vec![FALLBACK_TYPE],
        }
    }

    /// True for a mapping whose every field is optional.
    ///
    /// An empty mapping counts as all-optional. A type marker never does,
    /// since the named type may have required members.
    pub fn all_optional(&self) -> bool {
        match self {
            Shape::Type(_) | Shape::Other(_) => false,
            Shape::Fields(_) => self.fields().iter().all(|f| f.optional),
        }
    }
}

/// One field of a mapping shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeField {
    pub name: String,
    pub optional: bool,
    pub ty: String,
}

impl ShapeField {
    /// Parse a mapping entry; a trailing `?` on the key marks it optional.
    pub fn parse(key: &str, ty: &str) -> Self {
        let key = key.trim();
        let (name, optional) = match key.strip_suffix('?') {
            Some(name) => (name, true),
            None => (key, false),
        };
        Self {
            name: name.to_string(),
            optional,
            ty: ty.trim().to_string(),
        }
    }
}
