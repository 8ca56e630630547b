use puddleglum_codegen::{
    NamingRules,
    resolve::{RelationResolver, accessors},
};
use puddleglum_core::{to_plural, to_snake_case};
use puddleglum_ir::{DiscoveredClass, RelationDescriptor, Snapshot};

use super::TypeGenerator;
use crate::{
    FragmentBody, GeneratedFragment, INDEX_FILE,
    ast::{Interface, InterfaceField},
    type_mapper::{accessor_type, column_type},
};

/// Element type attached to many-relations that carry pivot data.
const PIVOT: &str = "{ pivot: { [key: string]: any } }";

/// Data models → interfaces of columns, relations, relation counts and
/// accessors, in that order.
pub struct ModelGenerator<'a> {
    snapshot: &'a Snapshot,
    naming: &'a NamingRules,
    relations: &'a dyn RelationResolver,
}

impl<'a> ModelGenerator<'a> {
    pub fn new(
        snapshot: &'a Snapshot,
        naming: &'a NamingRules,
        relations: &'a dyn RelationResolver,
    ) -> Self {
        Self {
            snapshot,
            naming,
            relations,
        }
    }

    pub fn interface(&self, class: &DiscoveredClass) -> Interface {
        let info = self.snapshot.class(&class.name);
        let table = info
            .and_then(|i| i.table.clone())
            .unwrap_or_else(|| to_plural(&to_snake_case(class.short_name())));
        let columns = self.snapshot.columns(&table);
        tracing::trace!(class = %class.name, %table, columns = columns.len(), "generating model");

        let relations = self.relations.relations(class);

        let properties = columns
            .iter()
            .map(|c| InterfaceField::new(&c.name, column_type(&c.type_name)).nullable(c.nullable));

        let relation_fields = relations.iter().map(|r| {
            InterfaceField::new(to_snake_case(&r.method), self.relation_type(r))
                .optional()
                .nullable(true)
        });

        let counts = relations.iter().filter(|r| r.is_many()).map(|r| {
            InterfaceField::new(format!("{}_count", to_snake_case(&r.method)), "number")
                .optional()
                .nullable(true)
        });

        let accessor_fields = info
            .map(|info| accessors(info, columns))
            .unwrap_or_default()
            .into_iter()
            .map(|a| {
                InterfaceField::new(a.property, accessor_type(a.declared_type.as_deref()))
                    .readonly()
                    .optional()
            });

        Interface::new(class.short_name())
            .fields_from(properties)
            .fields_from(relation_fields)
            .fields_from(counts)
            .fields_from(accessor_fields)
    }

    fn relation_type(&self, relation: &RelationDescriptor) -> String {
        let target = relation
            .related
            .as_deref()
            .map(|r| self.naming.class_reference(r))
            .unwrap_or_else(|| "any".to_string());

        match (relation.is_many(), relation.supports_pivot) {
            (false, _) => target,
            (true, false) => format!("Array<{}>", target),
            (true, true) => format!("Array<{} & {}>", target, PIVOT),
        }
    }
}

impl TypeGenerator for ModelGenerator<'_> {
    fn generate(&self, class: &DiscoveredClass) -> Option<GeneratedFragment> {
        Some(GeneratedFragment {
            owner: class.name.clone(),
            filename: INDEX_FILE.to_string(),
            namespace: Some(self.naming.namespace(&class.namespace)),
            body: FragmentBody::Interface(self.interface(class)),
        })
    }
}
