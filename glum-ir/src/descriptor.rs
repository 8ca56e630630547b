//! Resolved descriptors the type generators consume.

use crate::Shape;

/// Whether a relation points at one record or a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    ToOne,
    ToMany,
}

/// A relation resolved from a model's declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationDescriptor {
    /// Relation method name as declared (e.g. `subCategory`).
    pub method: String,
    pub kind: RelationKind,
    /// Fully-qualified related model; `None` when the target is polymorphic
    /// or otherwise unknown.
    pub related: Option<String>,
    pub supports_pivot: bool,
}

impl RelationDescriptor {
    /// Map an ORM relation type name onto a descriptor.
    ///
    /// Unknown relation types are to-one relations without a target.
    pub fn from_relation_type(method: &str, relation: &str, related: Option<&str>) -> Self {
        let relation = relation.rsplit('\\').next().unwrap_or(relation);
        let (kind, supports_pivot, known) = match relation {
            "HasMany" | "HasManyThrough" | "MorphMany" => (RelationKind::ToMany, false, true),
            "BelongsToMany" | "MorphToMany" => (RelationKind::ToMany, true, true),
            "HasOne" | "BelongsTo" | "MorphOne" | "HasOneThrough" => {
                (RelationKind::ToOne, false, true)
            }
            _ => (RelationKind::ToOne, false, false),
        };
        Self {
            method: method.to_string(),
            kind,
            related: if known {
                related.map(|r| r.trim_start_matches('\\').to_string())
            } else {
                None
            },
            supports_pivot,
        }
    }

    pub fn is_many(&self) -> bool {
        self.kind == RelationKind::ToMany
    }
}

/// A computed property exposed by a model accessor method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorDescriptor {
    /// Property name the accessor is serialized under.
    pub property: String,
    /// Declared value type, as written in source.
    pub declared_type: Option<String>,
    pub is_computed: bool,
}

/// A `{name}` segment of a route URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathParameter {
    pub name: String,
    pub required: bool,
}

/// One API route bound to a controller action.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDescriptor {
    /// Lower-cased first HTTP method (e.g. `get`).
    pub http_method: String,
    pub uri: String,
    pub path_parameters: Vec<PathParameter>,
    pub controller: String,
    pub action: String,
    /// Validated-request class taken by the action, if any.
    pub request_class: Option<String>,
    pub request_shape: Option<Shape>,
    pub response_shape: Option<Shape>,
}

impl RouteDescriptor {
    /// Extract `{name}` / `{name?}` segments from a URI template.
    pub fn parse_path_parameters(uri: &str) -> Vec<PathParameter> {
        let mut params = Vec::new();
        let mut rest = uri;
        while let Some(start) = rest.find('{') {
            let after = &rest[start + 1..];
            let Some(end) = after.find('}') else {
                break;
            };
            let raw = after[..end].trim();
            let (name, required) = match raw.strip_suffix('?') {
                Some(name) => (name, false),
                None => (raw, true),
            };
            if !name.is_empty() {
                params.push(PathParameter {
                    name: name.to_string(),
                    required,
                });
            }
            rest = &after[end + 1..];
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_kinds() {
        let rel = RelationDescriptor::from_relation_type("posts", "HasMany", Some("App\\Models\\Post"));
        assert!(rel.is_many());
        assert!(!rel.supports_pivot);

        let rel = RelationDescriptor::from_relation_type("tags", "BelongsToMany", Some("\\App\\Models\\Tag"));
        assert!(rel.is_many());
        assert!(rel.supports_pivot);
        assert_eq!(rel.related.as_deref(), Some("App\\Models\\Tag"));

        let rel = RelationDescriptor::from_relation_type(
            "owner",
            "Illuminate\\Database\\Eloquent\\Relations\\BelongsTo",
            Some("App\\Models\\User"),
        );
        assert_eq!(rel.kind, RelationKind::ToOne);
        assert_eq!(rel.related.as_deref(), Some("App\\Models\\User"));
    }

    #[test]
    fn test_unknown_relation_type_has_no_target() {
        let rel = RelationDescriptor::from_relation_type("commentable", "MorphTo", Some("App\\Models\\Post"));
        assert_eq!(rel.kind, RelationKind::ToOne);
        assert_eq!(rel.related, None);
    }

    #[test]
    fn test_parse_path_parameters() {
        let params = RouteDescriptor::parse_path_parameters("api/users/{user}/posts/{post?}");
        assert_eq!(
            params,
            vec![
                PathParameter { name: "user".into(), required: true },
                PathParameter { name: "post".into(), required: false },
            ]
        );
        assert!(RouteDescriptor::parse_path_parameters("api/products").is_empty());
    }
}
