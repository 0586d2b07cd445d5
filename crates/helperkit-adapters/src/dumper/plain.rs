//! Plain-text structured dumper.
//!
//! ```text
//! Dump of variable "post"
//! array(2 items)
//!    title => string 'Hello' (5 chars)
//!    tags => array(1 items)
//!       0 => string 'news' (4 chars)
//! ```

use std::fmt::Write;

use tracing::trace;

use helperkit_core::{
    application::{ApplicationError, ports::ValueDumper},
    domain::{UNDEFINED_LABEL, Value},
    error::{HelperError, HelperResult},
};

/// Dumps values as indented plain text.
#[derive(Debug, Clone)]
pub struct PlainTextDumper {
    indent: usize,
}

impl PlainTextDumper {
    pub fn new() -> Self {
        Self { indent: 3 }
    }

    /// Spaces per nesting level.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    fn write_value(
        &self,
        out: &mut String,
        value: &Value,
        level: usize,
        max_depth: usize,
        label: &str,
    ) -> HelperResult<()> {
        match value {
            Value::Null => out.push_str("NULL"),
            Value::Boolean(b) => write!(out, "boolean {b}").map_err(|e| dump_failed(label, e))?,
            Value::Integer(i) => write!(out, "integer {i}").map_err(|e| dump_failed(label, e))?,
            Value::Float(x) => write!(out, "float {x:?}").map_err(|e| dump_failed(label, e))?,
            Value::String(s) => write!(out, "string '{}' ({} chars)", s, s.chars().count())
                .map_err(|e| dump_failed(label, e))?,
            Value::Array(items) => {
                write!(out, "array({} items)", items.len()).map_err(|e| dump_failed(label, e))?;
                if level >= max_depth {
                    out.push_str(" ...");
                    return Ok(());
                }
                for (index, item) in items.iter().enumerate() {
                    self.write_entry(out, &index.to_string(), item, level, max_depth, label)?;
                }
            }
            Value::Map(entries) => {
                write!(out, "array({} items)", entries.len()).map_err(|e| dump_failed(label, e))?;
                if level >= max_depth {
                    out.push_str(" ...");
                    return Ok(());
                }
                for (key, item) in entries {
                    self.write_entry(out, key, item, level, max_depth, label)?;
                }
            }
            Value::Object(object) => {
                write!(out, "object {}", object.type_name()).map_err(|e| dump_failed(label, e))?;
                if level >= max_depth {
                    out.push_str(" ...");
                    return Ok(());
                }

                let names = object
                    .gettable_property_names()
                    .map_err(|e| introspection_failure(label, e))?;

                // Index 0 is the host's synthetic entry.
                for name in names.iter().skip(1) {
                    match object.property(name) {
                        Ok(property) => {
                            self.write_entry(out, name, &property, level, max_depth, label)?;
                        }
                        Err(e) if e.is_not_accessible() => {
                            self.write_indent(out, level + 1);
                            write!(out, "{name} => {UNDEFINED_LABEL}")
                                .map_err(|e| dump_failed(label, e))?;
                        }
                        Err(e) => return Err(introspection_failure(label, e)),
                    }
                }
            }
        }

        Ok(())
    }

    fn write_entry(
        &self,
        out: &mut String,
        key: &str,
        value: &Value,
        level: usize,
        max_depth: usize,
        label: &str,
    ) -> HelperResult<()> {
        self.write_indent(out, level + 1);
        write!(out, "{key} => ").map_err(|e| dump_failed(label, e))?;
        self.write_value(out, value, level + 1, max_depth, label)
    }

    fn write_indent(&self, out: &mut String, level: usize) {
        out.push('\n');
        out.extend(std::iter::repeat_n(' ', self.indent * level));
    }
}

impl Default for PlainTextDumper {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueDumper for PlainTextDumper {
    fn dump(&self, value: &Value, label: &str, max_depth: usize) -> HelperResult<String> {
        trace!(label, kind = value.type_label(), max_depth, "Dumping value");

        let mut out = String::new();
        out.push_str(label);
        out.push('\n');
        self.write_value(&mut out, value, 0, max_depth, label)?;
        Ok(out)
    }
}

fn dump_failed(label: &str, error: std::fmt::Error) -> HelperError {
    ApplicationError::DumpFailed {
        label: label.to_string(),
        reason: error.to_string(),
    }
    .into()
}

fn introspection_failure(label: &str, error: impl ToString) -> HelperError {
    ApplicationError::IntrospectionFailure {
        path: label.to_string(),
        reason: error.to_string(),
    }
    .into()
}
