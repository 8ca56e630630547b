use puddleglum_codegen::NamingRules;
use puddleglum_ir::{DiscoveredClass, Snapshot};

use super::TypeGenerator;
use crate::{
    FragmentBody, GeneratedFragment, INDEX_FILE,
    ast::{Interface, InterfaceField},
    type_mapper::RuleType,
};

/// Validated requests → interfaces with one member per validated field.
pub struct RequestGenerator<'a> {
    snapshot: &'a Snapshot,
    naming: &'a NamingRules,
}

impl<'a> RequestGenerator<'a> {
    pub fn new(snapshot: &'a Snapshot, naming: &'a NamingRules) -> Self {
        Self { snapshot, naming }
    }

    pub fn interface(&self, class: &DiscoveredClass) -> Interface {
        let fields = self
            .snapshot
            .class(&class.name)
            .into_iter()
            .flat_map(|info| info.rules.iter())
            // nested keys describe array members
            .filter(|(field, _)| !field.contains('.'))
            .map(|(field, rules)| {
                let rule = RuleType::from_tokens(rules.tokens());
                let member = InterfaceField::new(field, rule.ty).nullable(rule.nullable);
                if rule.required {
                    member
                } else {
                    member.optional()
                }
            });

        Interface::new(class.short_name()).fields_from(fields)
    }
}

impl TypeGenerator for RequestGenerator<'_> {
    fn generate(&self, class: &DiscoveredClass) -> Option<GeneratedFragment> {
        Some(GeneratedFragment {
            owner: class.name.clone(),
            filename: INDEX_FILE.to_string(),
            namespace: Some(self.naming.namespace(&class.namespace)),
            body: FragmentBody::Interface(self.interface(class)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_interface() {
        let snapshot: Snapshot = serde_json::from_str(
            r#"{ "classes": { "App\\Http\\Requests\\StoreUser": {
                "ancestors": ["Illuminate\\Foundation\\Http\\FormRequest"],
                "rules": {
                    "email": "required|email|max:255",
                    "password": ["required", { "min": 8 }, "string"],
                    "age": "nullable|integer",
                    "tags": "array",
                    "tags.*": "string",
                    "avatar": ["image"],
                    "nickname": "min:3"
                }
            } } }"#,
        )
        .unwrap();
        let naming = NamingRules::default();
        let generator = RequestGenerator::new(&snapshot, &naming);
        let class = DiscoveredClass::new(
            "App\\Http\\Requests\\StoreUser",
            snapshot.class("App\\Http\\Requests\\StoreUser").unwrap(),
        );

        let fragment = generator.generate(&class).unwrap();

        assert_eq!(fragment.namespace.as_deref(), Some("Puddleglum.Requests"));
        insta::assert_snapshot!(fragment.text(), @r"
        export interface StoreUser {
          email: string;
          password: string;
          age?: number | null;
          tags?: Array<any>;
          avatar?: File;
          nickname?: any;
        }
        ");
    }

    #[test]
    fn test_request_without_rules() {
        let snapshot: Snapshot =
            serde_json::from_str(r#"{ "classes": { "App\\Http\\Requests\\Ping": {} } }"#).unwrap();
        let naming = NamingRules::default();
        let generator = RequestGenerator::new(&snapshot, &naming);
        let class = DiscoveredClass::new(
            "App\\Http\\Requests\\Ping",
            snapshot.class("App\\Http\\Requests\\Ping").unwrap(),
        );

        assert_eq!(generator.interface(&class).build(), "export interface Ping {}\n");
    }
}
