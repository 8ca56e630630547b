use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use indexmap::IndexMap;
use miette::SourceSpan;
use puddleglum_ir::ClassKind;
use serde::Deserialize;

use crate::{Error, Result};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "puddleglum.toml";

/// Root schema for puddleglum.toml. Every key is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory the TypeScript output is written to.
    pub output: PathBuf,

    /// Root of every generated namespace (e.g. `Puddleglum`).
    pub namespace: String,

    /// Sub-namespace model references resolve into.
    pub models_namespace: String,

    /// Include the dev-only autoload roots.
    pub autoload_dev: bool,

    /// Leading source namespace segment dropped from output names.
    pub app_namespace: String,

    /// Source namespace segments dropped from output namespaces.
    pub strip_segments: Vec<String>,

    /// Source namespace segments dropped from api directory paths.
    pub api_strip_segments: Vec<String>,

    /// Middleware a route must carry to be generated.
    pub middleware: String,

    /// Introspection snapshot written by the application.
    pub snapshot: PathBuf,

    /// Source file extension considered during discovery.
    pub extension: String,

    /// Read autoload roots from this composer.json instead of the tables below.
    pub composer: Option<PathBuf>,

    /// Namespace prefix → directory (or directories).
    pub autoload: IndexMap<String, AutoloadPath>,

    /// Dev-only namespace prefix → directory (or directories).
    #[serde(rename = "autoload-dev")]
    pub dev_autoload: IndexMap<String, AutoloadPath>,

    /// Ordered ancestor-marker → generator registry; first match wins.
    pub generators: Vec<GeneratorEntry>,
}

impl Default for Config {
    fn default() -> Self {
        let mut autoload = IndexMap::new();
        autoload.insert("App".to_string(), AutoloadPath::One("app".to_string()));

        Self {
            output: PathBuf::from("resources/ts/puddleglum"),
            namespace: "Puddleglum".to_string(),
            models_namespace: "Models".to_string(),
            autoload_dev: false,
            app_namespace: "App".to_string(),
            strip_segments: vec!["Http".to_string()],
            api_strip_segments: vec![
                "Http".to_string(),
                "Controllers".to_string(),
                "Domains".to_string(),
            ],
            middleware: "api".to_string(),
            snapshot: PathBuf::from("puddleglum.json"),
            extension: "php".to_string(),
            composer: None,
            autoload,
            dev_autoload: IndexMap::new(),
            generators: GeneratorEntry::defaults(),
        }
    }
}

/// One entry of the classification registry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorEntry {
    /// Fully-qualified ancestor class or interface.
    pub marker: String,
    pub kind: ClassKind,
}

impl GeneratorEntry {
    pub fn new(marker: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            marker: marker.into(),
            kind,
        }
    }

    /// The built-in registry: models, validated requests, controllers.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("Illuminate\\Database\\Eloquent\\Model", ClassKind::Model),
            Self::new("Illuminate\\Foundation\\Http\\FormRequest", ClassKind::Request),
            Self::new("App\\Http\\Controllers\\Controller", ClassKind::Controller),
        ]
    }
}

/// An autoload value: one directory or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AutoloadPath {
    One(String),
    Many(Vec<String>),
}

impl AutoloadPath {
    pub fn paths(&self) -> Vec<&str> {
        match self {
            AutoloadPath::One(path) => vec![path.as_str()],
            AutoloadPath::Many(paths) => paths.iter().map(String::as_str).collect(),
        }
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILE)
    }
}

impl Config {
    /// Parse a puddleglum.toml from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        config.validate(content, filename)?;
        Ok(config)
    }

    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        for segment in self.namespace.split('.') {
            if let Some(reason) = validate_identifier(segment) {
                return Err(Error::validation(
                    format!("invalid namespace '{}': {}", self.namespace, reason),
                    src,
                    filename,
                    find_key_span(src, "namespace"),
                ));
            }
        }

        if let Some(reason) = validate_identifier(&self.models_namespace) {
            return Err(Error::validation(
                format!(
                    "invalid models_namespace '{}': {}",
                    self.models_namespace, reason
                ),
                src,
                filename,
                find_key_span(src, "models_namespace"),
            ));
        }

        if self.extension.trim_start_matches('.').is_empty() {
            return Err(Error::validation(
                "extension cannot be empty",
                src,
                filename,
                find_key_span(src, "extension"),
            ));
        }

        if let Some(entry) = self
            .generators
            .iter()
            .find(|g| g.marker.trim_matches('\\').is_empty())
        {
            return Err(Error::validation(
                format!("generator marker for '{}' cannot be empty", entry.kind),
                src,
                filename,
                find_key_span(src, "marker"),
            ));
        }

        Ok(())
    }
}

/// Returns why `name` is not a valid TypeScript identifier, if it is not.
fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    match chars.next() {
        None => Some("cannot be empty"),
        Some(c) if !(c.is_ascii_alphabetic() || c == '_' || c == '$') => {
            Some("must start with a letter, '_' or '$'")
        }
        _ if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') => {
            Some("can only contain letters, digits, '_' and '$'")
        }
        _ => None,
    }
}

/// Locate `key = ...` at the start of a line.
fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(key)
            && rest.trim_start().starts_with('=')
        {
            let start = offset + (line.len() - trimmed.len());
            return Some(SourceSpan::from((start, key.len())));
        }
        offset += line.len();
    }
    None
}

/// A puddleglum.toml on disk together with its parsed configuration.
#[derive(Debug)]
pub struct ConfigFile {
    path: PathBuf,
    config: Config,
}

impl ConfigFile {
    /// Open and parse a puddleglum.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let filename = path.display().to_string();
        let config = Config::from_str_with_filename(&content, &filename)?;

        Ok(Self { path, config })
    }

    /// Open `path` when it exists, otherwise fall back to the defaults
    /// rooted at the file's directory.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::open(path);
        }
        Ok(Self {
            path: path.to_path_buf(),
            config: Config::default(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory relative paths in the configuration resolve against.
    pub fn base_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn into_config(self) -> Config {
        self.config
    }
}
