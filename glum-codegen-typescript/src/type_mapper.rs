//! Mapping source types onto TypeScript types.

use puddleglum_codegen::{NamingRules, is_model_reference};
use puddleglum_ir::{FALLBACK_TYPE, Shape};

/// Storage column type → TypeScript type.
pub fn column_type(type_name: &str) -> &'static str {
    match type_name.trim().to_ascii_lowercase().as_str() {
        "tinyint" => "boolean",
        "longtext" | "text" | "varchar" | "timestamp" | "datetime" | "date" => "string",
        "int" | "bigint" | "double" | "decimal" => "number",
        "json" => "Array<any> | any",
        _ => "any",
    }
}

/// Declared accessor value type → TypeScript type.
///
/// `?T` becomes `T | null` and unions map member-wise.
pub fn accessor_type(declared: Option<&str>) -> String {
    let Some(declared) = declared.map(str::trim).filter(|d| !d.is_empty()) else {
        return "any".to_string();
    };
    let (declared, nullable) = match declared.strip_prefix('?') {
        Some(inner) => (inner, true),
        None => (declared, false),
    };

    let mut members: Vec<&str> = Vec::new();
    for member in declared.split('|').map(scalar_type) {
        if !members.contains(&member) {
            members.push(member);
        }
    }
    if nullable && !members.contains(&"null") {
        members.push("null");
    }
    members.join(" | ")
}

fn scalar_type(name: &str) -> &'static str {
    match name.trim().trim_start_matches('\\').to_ascii_lowercase().as_str() {
        "int" | "float" | "double" => "number",
        "string" => "string",
        "bool" | "true" | "false" => "boolean",
        "array" => "Array<any>",
        "null" => "null",
        _ => "any",
    }
}

/// Validation rule tokens → (required, nullable, type).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleType {
    pub required: bool,
    pub nullable: bool,
    pub ty: &'static str,
}

impl RuleType {
    pub fn from_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Self {
        let mut rule = Self {
            required: false,
            nullable: false,
            ty: "any",
        };
        let mut typed = false;

        for token in tokens {
            let name = token.split(':').next().unwrap_or(token).trim();
            match name {
                "required" => rule.required = true,
                "nullable" => rule.nullable = true,
                _ if !typed => {
                    if let Some(ty) = rule_token_type(name) {
                        rule.ty = ty;
                        typed = true;
                    }
                }
                _ => {}
            }
        }
        rule
    }
}

fn rule_token_type(name: &str) -> Option<&'static str> {
    Some(match name {
        "string" | "email" | "url" | "uuid" | "ulid" | "date" | "date_format" | "ip" | "alpha"
        | "alpha_dash" | "alpha_num" | "regex" | "timezone" | "password" => "string",
        "integer" | "numeric" | "decimal" | "digits" | "digits_between" => "number",
        "boolean" | "accepted" | "declined" => "boolean",
        "array" | "list" => "Array<any>",
        "file" | "image" | "mimes" => "File",
        _ => return None,
    })
}

/// Translates explicit shape markers into TypeScript type expressions.
#[derive(Debug, Clone, Copy)]
pub struct ShapeTranslator<'a> {
    naming: &'a NamingRules,
}

impl<'a> ShapeTranslator<'a> {
    pub fn new(naming: &'a NamingRules) -> Self {
        Self { naming }
    }

    /// Built-in types pass through; anything else is a model reference.
    pub fn type_name(&self, token: &str) -> String {
        if is_model_reference(token) {
            self.naming.model_reference(token)
        } else {
            token.trim().to_string()
        }
    }

    /// A type shape translates its token; a mapping renders as `{a: T, b?: U}`.
    /// Malformed markers render as `any`.
    pub fn shape(&self, shape: &Shape) -> String {
        match shape {
            Shape::Type(ty) => self.type_name(ty),
            Shape::Other(_) => FALLBACK_TYPE.to_string(),
            Shape::Fields(_) => {
                let members: Vec<String> = shape
                    .fields()
                    .iter()
                    .map(|f| {
                        let optional = if f.optional { "?" } else { "" };
                        format!("{}{}: {}", f.name, optional, self.type_name(&f.ty))
                    })
                    .collect();
                format!("{{{}}}", members.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_types() {
        assert_eq!(column_type("tinyint"), "boolean");
        for ty in ["longtext", "text", "varchar", "timestamp", "datetime", "date"] {
            assert_eq!(column_type(ty), "string", "{ty}");
        }
        for ty in ["int", "bigint", "double", "decimal"] {
            assert_eq!(column_type(ty), "number", "{ty}");
        }
        assert_eq!(column_type("json"), "Array<any> | any");
        assert_eq!(column_type("VARCHAR"), "string");
        assert_eq!(column_type("geometry"), "any");
    }

    #[test]
    fn test_accessor_types() {
        assert_eq!(accessor_type(None), "any");
        assert_eq!(accessor_type(Some("string")), "string");
        assert_eq!(accessor_type(Some("?int")), "number | null");
        assert_eq!(accessor_type(Some("int|float")), "number");
        assert_eq!(accessor_type(Some("string|null")), "string | null");
        assert_eq!(accessor_type(Some("array")), "Array<any>");
        assert_eq!(accessor_type(Some("\\Carbon\\Carbon")), "any");
    }

    #[test]
    fn test_rule_types() {
        let rule = RuleType::from_tokens(["required", "email", "max:255"]);
        assert_eq!(
            rule,
            RuleType {
                required: true,
                nullable: false,
                ty: "string"
            }
        );

        let rule = RuleType::from_tokens(["nullable", "integer", "string"]);
        assert!(!rule.required);
        assert!(rule.nullable);
        assert_eq!(rule.ty, "number");

        let rule = RuleType::from_tokens(["required_if:role,admin", "mimes:jpg,png"]);
        assert!(!rule.required);
        assert_eq!(rule.ty, "File");

        assert_eq!(RuleType::from_tokens(["min:3"]).ty, "any");
    }

    #[test]
    fn test_shape_translation() {
        let naming = NamingRules::default();
        let translator = ShapeTranslator::new(&naming);

        assert_eq!(translator.type_name("string"), "string");
        assert_eq!(translator.type_name("Product"), "Puddleglum.Models.Product");
        assert_eq!(
            translator.shape(&Shape::Type("PaginatedResponse<Puddleglum.Models.Product>".into())),
            "PaginatedResponse<Puddleglum.Models.Product>"
        );

        let mapping = Shape::Fields(
            [("name", "string"), ("owner?", "User")]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.into()))
                .collect(),
        );
        assert_eq!(
            translator.shape(&mapping),
            "{name: string, owner?: Puddleglum.Models.User}"
        );
    }

    #[test]
    fn test_malformed_shapes_translate_to_any() {
        let naming = NamingRules::default();
        let translator = ShapeTranslator::new(&naming);

        let list: Shape = serde_json::from_str(r#"["Product"]"#).unwrap();
        assert_eq!(translator.shape(&list), "any");

        let mapping: Shape =
            serde_json::from_str(r#"{ "count": 5, "meta?": { "a": "string" }, "item": "Product" }"#)
                .unwrap();
        assert_eq!(
            translator.shape(&mapping),
            "{count: any, meta?: any, item: Puddleglum.Models.Product}"
        );
    }
}
