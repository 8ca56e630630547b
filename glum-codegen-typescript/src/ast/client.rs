//! Client classes: a default-exported class of static async methods, one
//! per API route.

use puddleglum_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Headers sent with every call, merged with the caller's config.
const PRECOGNITION_OPTIONS: &str = "{ headers: { \"Precognition\": validationOnly, ...fieldToValidate ? {\"Precognition-Validate-Only\": fieldToValidate} : {} }, ...config }";

/// Trailing parameters of every client method.
const PRECOGNITION_PARAMS: &str =
    "validationOnly: boolean = false, fieldToValidate: string = \"\", config: AxiosRequestConfig = {}";

/// A parameter of a client method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: String,
    pub default: Option<String>,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            default: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    fn render(&self) -> String {
        match &self.default {
            Some(default) => format!("{}: {} = {}", self.name, self.ty, default),
            None => format!("{}: {}", self.name, self.ty),
        }
    }
}

/// How the request payload travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    None,
    /// Serialized onto the URL.
    Query,
    /// Sent as the request body.
    Body,
}

/// One static method calling a single route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientMethod {
    pub action: String,
    /// Lower-case axios method (`get`, `post`, ...).
    pub http_method: String,
    /// Template literal body, e.g. `/api/products/${id}`.
    pub path: String,
    /// Path parameters followed by the optional request parameter.
    pub params: Vec<Param>,
    pub payload: Payload,
    /// Response type passed as the axios generic.
    pub generic: Option<String>,
}

impl ClientMethod {
    pub fn signature(&self) -> String {
        self.params
            .iter()
            .map(Param::render)
            .chain(std::iter::once(PRECOGNITION_PARAMS.to_string()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn call(&self) -> String {
        let generic = self
            .generic
            .as_ref()
            .map(|g| format!("<{}>", g))
            .unwrap_or_default();
        let target = match self.payload {
            Payload::None => format!("`{}`", self.path),
            Payload::Query => format!("`{}?${{transformToQueryString(request)}}`", self.path),
            Payload::Body => format!("`{}`, request", self.path),
        };
        format!(
            "axios.{}{}({}, {})",
            self.http_method, generic, target, PRECOGNITION_OPTIONS
        )
    }
}

impl Renderable for ClientMethod {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            format!("static async {}({}) {{", self.action, self.signature()),
            vec![CodeFragment::line(format!("return {};", self.call()))],
            Some("}".to_string()),
        )]
    }
}

/// `export default class <Name> { ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientClass {
    pub name: String,
    pub methods: Vec<ClientMethod>,
}

impl ClientClass {
    pub fn build(&self) -> String {
        CodeBuilder::typescript().render(self).build()
    }
}

impl Renderable for ClientClass {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = Vec::new();
        for (i, method) in self.methods.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::blank());
            }
            body.extend(method.to_fragments());
        }
        vec![CodeFragment::block(
            format!("export default class {} {{", self.name),
            body,
            Some("}".to_string()),
        )]
    }
}
