//! Template engine implementation
//!
//! Source is tokenized and compiled once into an instruction list; a
//! [`Template`] is that list, rendered by walking it against JSON data.
//! Compilation is idempotent: the same source always yields an
//! equivalent instruction list.

mod compile;
mod tokenize;
mod value;

use crate::template::error::TemplateError;
use serde_json::Value;

use compile::Op;
use value::{is_truthy, loop_scope, resolve_key, stringify_value};

/// A compiled template: a reusable mapping from a data object to a
/// string.
///
/// Interpolated values are emitted raw - callers pre-escape untrusted
/// content with [`crate::escape_html`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    ops: Vec<Op>,
}

impl Template {
    /// Compile template source.
    ///
    /// Unbalanced `{{`/`}}` markers and malformed or mismatched blocks
    /// are rejected here, with line numbers; a compiled template cannot
    /// fail structurally at render time.
    pub fn compile(source: &str) -> Result<Self, TemplateError> {
        Ok(Self {
            ops: compile::compile(source)?,
        })
    }

    /// Render against a data object.
    ///
    /// Remaining failure modes are data mismatches: undefined keys,
    /// arrays or objects in scalar position, `{{each}}` over a
    /// non-array.
    pub fn render(&self, data: &Value) -> Result<String, TemplateError> {
        let mut output = String::new();
        render_ops(&self.ops, data, &mut output)?;
        Ok(output)
    }
}

fn render_ops(ops: &[Op], data: &Value, output: &mut String) -> Result<(), TemplateError> {
    for op in ops {
        match op {
            Op::Text(text) => output.push_str(text),
            Op::Emit { key, line } => {
                let value =
                    resolve_key(data, key).ok_or_else(|| TemplateError::UndefinedKey {
                        key: key.clone(),
                        line: *line,
                    })?;
                output.push_str(&stringify_value(value, key, *line)?);
            }
            Op::Each {
                key,
                var,
                line,
                body,
            } => {
                let value =
                    resolve_key(data, key).ok_or_else(|| TemplateError::UndefinedKey {
                        key: key.clone(),
                        line: *line,
                    })?;
                let items = value.as_array().ok_or_else(|| TemplateError::NotAnArray {
                    key: key.clone(),
                    line: *line,
                })?;
                for item in items {
                    let scope = loop_scope(data, var, item.clone());
                    render_ops(body, &scope, output)?;
                }
            }
            Op::If { key, body, .. } => {
                // Missing key counts as falsy so templates can guard
                // optional fields
                let truthy = resolve_key(data, key).map(is_truthy).unwrap_or(false);
                if truthy {
                    render_ops(body, data, output)?;
                }
            }
        }
    }
    Ok(())
}

/// Convenience function to compile and render in one step
pub fn render(source: &str, data: &Value) -> Result<String, TemplateError> {
    Template::compile(source)?.render(data)
}

#[cfg(test)]
mod tests;
