//! Serde model of the introspection snapshot dumped by the host application.

use indexmap::IndexMap;
use serde::{Deserialize, de::IgnoredAny};

use crate::Shape;

/// Root of `puddleglum.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    /// Class catalog keyed by fully-qualified class name.
    #[serde(default)]
    pub classes: IndexMap<String, ClassInfo>,

    /// Column metadata keyed by table name.
    #[serde(default)]
    pub tables: IndexMap<String, Vec<ColumnDescriptor>>,

    /// The router's table, in registration order.
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

impl Snapshot {
    /// Look up a class by its fully-qualified name.
    ///
    /// A leading namespace separator is ignored, so `\App\Models\User` and
    /// `App\Models\User` resolve to the same entry.
    pub fn class(&self, name: &str) -> Option<&ClassInfo> {
        self.classes.get(name.trim_start_matches('\\'))
    }

    /// Column metadata for a table; unknown tables have no columns.
    pub fn columns(&self, table: &str) -> &[ColumnDescriptor] {
        self.tables.get(table).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Reflected shape of one class.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassInfo {
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,

    /// Every ancestor class and implemented interface, nearest first.
    #[serde(default)]
    pub ancestors: Vec<String>,

    /// Backing table for data models. Dump it whenever the table does not
    /// follow the pluralized snake-case convention.
    #[serde(default)]
    pub table: Option<String>,

    /// Relation declarations supplied by the data layer.
    #[serde(default)]
    pub relations: Vec<RelationDecl>,

    /// Public methods.
    #[serde(default)]
    pub methods: Vec<MethodInfo>,

    /// Validation rules for request classes, in declaration order.
    #[serde(default)]
    pub rules: IndexMap<String, RuleSet>,
}

impl ClassInfo {
    pub fn method(&self, name: &str) -> Option<&MethodInfo> {
        self.methods.iter().find(|m| m.name == name)
    }
}

/// One column of a table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    /// Storage type as reported by the database (e.g. `varchar`, `bigint`).
    pub type_name: String,
    #[serde(default)]
    pub nullable: bool,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, nullable: bool) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            nullable,
        }
    }
}

/// A relation method declared on a data model.
#[derive(Debug, Clone, Deserialize)]
pub struct RelationDecl {
    /// The zero-argument method returning the relation.
    pub method: String,
    /// ORM relation type, e.g. `HasMany` or `BelongsTo`.
    pub relation: String,
    /// Fully-qualified name of the related model.
    #[serde(default)]
    pub related: Option<String>,
    /// Declared by a trait the model uses rather than the model itself.
    #[serde(default)]
    pub from_trait: bool,
}

/// A public method of a class.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MethodInfo {
    pub name: String,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default)]
    pub parameters: Vec<ParamInfo>,
    /// Declared return type, as written in source.
    #[serde(default)]
    pub returns: Option<String>,
    /// Explicit value type of an accessor, when the return type cannot say.
    #[serde(default)]
    pub accessor_type: Option<String>,
    /// Explicit request-shape marker.
    #[serde(default)]
    pub request_shape: Option<Shape>,
    /// Explicit response-shape marker.
    #[serde(default)]
    pub response_shape: Option<Shape>,
}

/// A method parameter.
#[derive(Debug, Clone, Deserialize)]
pub struct ParamInfo {
    pub name: String,
    #[serde(default, rename = "type")]
    pub ty: Option<String>,
}

/// Validation rules for one field: `"required|email"` or `["required", {...}]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RuleSet {
    Pipe(String),
    List(Vec<RuleEntry>),
}

/// One entry of a rule list. Rule objects carry no token.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RuleEntry {
    Token(String),
    Object(IgnoredAny),
}

impl RuleSet {
    /// The string tokens of this rule set, in declaration order.
    pub fn tokens(&self) -> Vec<&str> {
        match self {
            RuleSet::Pipe(rules) => rules
                .split('|')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect(),
            RuleSet::List(entries) => entries
                .iter()
                .filter_map(|entry| match entry {
                    RuleEntry::Token(token) => Some(token.trim()),
                    RuleEntry::Object(_) => None,
                })
                .collect(),
        }
    }
}

/// One entry of the route table.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteEntry {
    pub uri: String,
    #[serde(default)]
    pub methods: Vec<String>,
    #[serde(default)]
    pub middleware: Vec<String>,
    /// `Class@method` or an invokable `Class`; closures have none.
    #[serde(default)]
    pub controller: Option<String>,
}
