use puddleglum_ir::{DiscoveredClass, RelationDescriptor, Snapshot};

/// Source of a model's relation descriptors.
pub trait RelationResolver {
    fn relations(&self, class: &DiscoveredClass) -> Vec<RelationDescriptor>;
}

/// Resolves relations from the declarations listed in the snapshot.
///
/// Declarations inherited from traits and declarations without a method
/// name are skipped.
#[derive(Debug, Clone, Copy)]
pub struct DeclaredRelations<'a> {
    snapshot: &'a Snapshot,
}

impl<'a> DeclaredRelations<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self { snapshot }
    }
}

impl RelationResolver for DeclaredRelations<'_> {
    fn relations(&self, class: &DiscoveredClass) -> Vec<RelationDescriptor> {
        let Some(info) = self.snapshot.class(&class.name) else {
            return Vec::new();
        };
        info.relations
            .iter()
            .filter(|decl| !decl.from_trait && !decl.method.trim().is_empty())
            .map(|decl| {
                RelationDescriptor::from_relation_type(
                    decl.method.trim(),
                    &decl.relation,
                    decl.related.as_deref(),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use puddleglum_ir::RelationKind;

    use super::*;

    #[test]
    fn test_declared_relations() {
        let snapshot: Snapshot = serde_json::from_str(
            r#"{ "classes": { "App\\Models\\Product": { "relations": [
                { "method": "subCategory", "relation": "BelongsTo", "related": "App\\Models\\Category" },
                { "method": "tags", "relation": "BelongsToMany", "related": "App\\Models\\Tag" },
                { "method": "media", "relation": "MorphMany", "related": "App\\Models\\Media", "from_trait": true },
                { "method": " ", "relation": "HasOne" }
            ] } } }"#,
        )
        .unwrap();
        let class = DiscoveredClass::new(
            "App\\Models\\Product",
            snapshot.class("App\\Models\\Product").unwrap(),
        );

        let relations = DeclaredRelations::new(&snapshot).relations(&class);

        assert_eq!(relations.len(), 2);
        assert_eq!(relations[0].method, "subCategory");
        assert_eq!(relations[0].kind, RelationKind::ToOne);
        assert_eq!(relations[0].related.as_deref(), Some("App\\Models\\Category"));
        assert!(relations[1].supports_pivot);
    }
}
