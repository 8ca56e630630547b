//! TypeScript interface builder.

use puddleglum_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A field in a TypeScript interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceField {
    pub name: String,
    pub ty: String,
    pub optional: bool,
    pub readonly: bool,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
            readonly: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    /// Append ` | null` to the type when `nullable`.
    pub fn nullable(mut self, nullable: bool) -> Self {
        if nullable {
            self.ty.push_str(" | null");
        }
        self
    }

    fn render(&self) -> String {
        let readonly = if self.readonly { "readonly " } else { "" };
        let optional = if self.optional { "?" } else { "" };
        format!("{}{}{}: {};", readonly, self.name, optional, self.ty)
    }
}

/// Builder for TypeScript interfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    name: String,
    fields: Vec<InterfaceField>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a required field.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(InterfaceField::new(name, ty));
        self
    }

    /// Add a field with full configuration.
    pub fn field_with(mut self, field: InterfaceField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields_from(mut self, fields: impl IntoIterator<Item = InterfaceField>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[InterfaceField] {
        &self.fields
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&InterfaceField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        CodeBuilder::typescript().render(self).build()
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.fields.is_empty() {
            vec![CodeFragment::line(format!("export interface {} {{}}", self.name))]
        } else {
            vec![CodeFragment::block(
                format!("export interface {} {{", self.name),
                self.fields
                    .iter()
                    .map(|f| CodeFragment::line(f.render()))
                    .collect(),
                Some("}".to_string()),
            )]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_interface() {
        let i = Interface::new("Empty").build();
        assert_eq!(i, "export interface Empty {}\n");
    }

    #[test]
    fn test_interface_with_fields() {
        let i = Interface::new("Person")
            .field("name", "string")
            .field_with(InterfaceField::new("age", "number").nullable(true))
            .field_with(InterfaceField::new("nickname", "string").optional())
            .build();
        assert_eq!(
            i,
            "export interface Person {\n  name: string;\n  age: number | null;\n  nickname?: string;\n}\n"
        );
    }

    #[test]
    fn test_readonly_optional_field() {
        let i = Interface::new("Point")
            .field_with(InterfaceField::new("label", "string").readonly().optional())
            .build();
        assert!(i.contains("readonly label?: string;"));
    }
}
