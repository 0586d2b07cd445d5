//! Fixture loader.
//!
//! A fixture describes one debug invocation without a template engine: the
//! variables in scope and the debug helper's child nodes.
//!
//! # `fixture.json` format
//!
//! ```json
//! {
//!   "scope": {
//!     "form": { "title": "Hello" },
//!     "post": { "$object": "Post", "properties": { "uid": 7 }, "hidden": { "password": "x" } }
//!   },
//!   "nodes": [
//!     { "text": "ignored" },
//!     { "helper": "format.replace", "arguments": { "substring": "a", "content": "{post.title}" } },
//!     { "variable": "form.title" }
//!   ]
//! }
//! ```
//!
//! TOML fixtures (`.toml` extension) use the same structure. String argument
//! values written as `{...}` are kept as accessor expressions.

use std::{
    fs,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use helperkit_core::domain::{
    ChildHelperReference, HelperId, RenderNode, Scope, SuppliedArgument, Value,
};

use crate::host::RecordObject;

/// Key marking a JSON object as a host object.
pub const OBJECT_MARKER: &str = "$object";

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to read fixture '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported fixture format: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("Failed to parse fixture: {reason}")]
    Parse { reason: String },

    #[error("Invalid fixture: {reason}")]
    Invalid { reason: String },
}

impl FixtureError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Io { path, .. } => vec![
                format!("Check that '{}' exists and is readable", path.display()),
            ],
            Self::UnsupportedFormat { .. } => vec![
                "Use a .json or .toml file".into(),
            ],
            Self::Parse { .. } => vec![
                "Fixtures need a 'scope' table and a 'nodes' list".into(),
                "Each node is {\"text\": ..}, {\"helper\": .., \"arguments\": ..} or {\"variable\": ..}".into(),
            ],
            Self::Invalid { .. } => vec![
                format!("Host objects need a string '{OBJECT_MARKER}' type name"),
                "Helper ids may only contain letters, digits, '.', '_' and '-'".into(),
            ],
        }
    }
}

/// A parsed fixture.
#[derive(Debug, Clone, Default)]
pub struct Fixture {
    pub scope: Scope,
    pub nodes: Vec<RenderNode>,
}

impl Fixture {
    pub fn from_json(source: &str) -> Result<Self, FixtureError> {
        let file: FixtureFile = serde_json::from_str(source).map_err(|e| FixtureError::Parse {
            reason: e.to_string(),
        })?;
        file.into_fixture()
    }

    pub fn from_toml(source: &str) -> Result<Self, FixtureError> {
        let file: FixtureFile = toml::from_str(source).map_err(|e| FixtureError::Parse {
            reason: e.to_string(),
        })?;
        file.into_fixture()
    }
}

// ── File format ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct FixtureFile {
    #[serde(default)]
    scope: IndexMap<String, serde_json::Value>,
    #[serde(default)]
    nodes: Vec<NodeEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NodeEntry {
    Text {
        text: String,
    },
    Helper {
        helper: String,
        #[serde(default)]
        arguments: IndexMap<String, serde_json::Value>,
    },
    Variable {
        variable: String,
    },
}

impl FixtureFile {
    fn into_fixture(self) -> Result<Fixture, FixtureError> {
        let scope = self
            .scope
            .into_iter()
            .map(|(name, value)| Ok((name, convert_value(value)?)))
            .collect::<Result<Scope, FixtureError>>()?;

        let nodes = self
            .nodes
            .into_iter()
            .map(NodeEntry::into_node)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(variables = scope.len(), nodes = nodes.len(), "Fixture parsed");
        Ok(Fixture { scope, nodes })
    }
}

impl NodeEntry {
    fn into_node(self) -> Result<RenderNode, FixtureError> {
        Ok(match self {
            Self::Text { text } => RenderNode::text(text),
            Self::Variable { variable } => RenderNode::variable(variable),
            Self::Helper { helper, arguments } => {
                let id = HelperId::parse(&helper).map_err(|e| FixtureError::Invalid {
                    reason: e.to_string(),
                })?;

                let mut reference = ChildHelperReference::new(id);
                for (name, value) in arguments {
                    reference = reference.with_supplied(name, convert_argument(value)?);
                }
                RenderNode::helper(reference)
            }
        })
    }
}

fn convert_argument(value: serde_json::Value) -> Result<SuppliedArgument, FixtureError> {
    match value {
        serde_json::Value::String(s) if is_expression(&s) => Ok(SuppliedArgument::Expression(s)),
        other => Ok(SuppliedArgument::Value(convert_value(other)?)),
    }
}

fn is_expression(text: &str) -> bool {
    text.len() > 2 && text.starts_with('{') && text.ends_with('}')
}

/// Convert JSON into a template value, building host objects for `$object` maps.
fn convert_value(value: serde_json::Value) -> Result<Value, FixtureError> {
    match value {
        serde_json::Value::Array(items) => Ok(Value::Array(
            items.into_iter().map(convert_value).collect::<Result<_, _>>()?,
        )),
        serde_json::Value::Object(mut entries) => match entries.remove(OBJECT_MARKER) {
            Some(serde_json::Value::String(type_name)) => {
                let mut record = RecordObject::new(type_name);
                for (name, value) in take_table(&mut entries, "properties")? {
                    record = record.with_property(name, convert_value(value)?);
                }
                for (name, value) in take_table(&mut entries, "hidden")? {
                    record = record.with_hidden(name, convert_value(value)?);
                }
                Ok(record.into_value())
            }
            Some(other) => Err(FixtureError::Invalid {
                reason: format!("'{OBJECT_MARKER}' must be a type name, got {other}"),
            }),
            None => Ok(Value::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| Ok((k, convert_value(v)?)))
                    .collect::<Result<_, FixtureError>>()?,
            )),
        },
        scalar => Ok(Value::from(scalar)),
    }
}

fn take_table(
    entries: &mut serde_json::Map<String, serde_json::Value>,
    key: &str,
) -> Result<serde_json::Map<String, serde_json::Value>, FixtureError> {
    match entries.remove(key) {
        None => Ok(serde_json::Map::new()),
        Some(serde_json::Value::Object(table)) => Ok(table),
        Some(other) => Err(FixtureError::Invalid {
            reason: format!("'{key}' must be a table, got {other}"),
        }),
    }
}

// ── Loader ───────────────────────────────────────────────────────────────────

/// Loads a [`Fixture`] from a `.json` or `.toml` file.
pub struct FixtureLoader {
    path: PathBuf,
}

impl FixtureLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Fixture, FixtureError> {
        let source = fs::read_to_string(&self.path).map_err(|source| FixtureError::Io {
            path: self.path.clone(),
            source,
        })?;

        match self.path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Fixture::from_json(&source),
            Some("toml") => Fixture::from_toml(&source),
            _ => Err(FixtureError::UnsupportedFormat {
                path: self.path.clone(),
            }),
        }
    }
}
