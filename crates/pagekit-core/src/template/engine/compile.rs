//! Compilation of token pieces into an instruction list
//!
//! Block structure (`each`/`if` nesting) is resolved here, once, so
//! rendering is a plain walk over the resulting ops with no re-scanning
//! of the source. Unbalanced or mismatched blocks are compile errors.

use super::tokenize::{Piece, Tag, Tokenizer};
use crate::template::error::TemplateError;

/// One rendering instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Op {
    /// Emit literal text.
    Text(String),
    /// Emit the scalar value at a dotted key.
    Emit { key: String, line: usize },
    /// Render the body once per element of the array at `key`, with the
    /// element bound to `var`.
    Each {
        key: String,
        var: String,
        line: usize,
        body: Vec<Op>,
    },
    /// Render the body when the value at `key` is truthy.
    If {
        key: String,
        line: usize,
        body: Vec<Op>,
    },
}

enum BlockKind {
    Each { key: String, var: String },
    If { key: String },
}

/// An open block awaiting its closing tag.
struct Frame {
    kind: BlockKind,
    line: usize,
    ops: Vec<Op>,
}

/// Compile template source into an instruction list.
pub(crate) fn compile(source: &str) -> Result<Vec<Op>, TemplateError> {
    let mut root: Vec<Op> = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();

    for piece in Tokenizer::new(source) {
        match piece? {
            Piece::Text(text) => push_text(current(&mut root, &mut stack), text),
            Piece::Tag(tag) => handle_tag(tag, &mut root, &mut stack)?,
        }
    }

    if let Some(frame) = stack.pop() {
        let message = match &frame.kind {
            BlockKind::Each { key, .. } => format!("Unclosed each loop for key '{}'", key),
            BlockKind::If { key } => format!("Unclosed if block for key '{}'", key),
        };
        return Err(TemplateError::MalformedSyntax {
            message,
            line: frame.line,
        });
    }

    Ok(root)
}

/// The op list currently being appended to (innermost open block, or
/// the root).
fn current<'a>(root: &'a mut Vec<Op>, stack: &'a mut Vec<Frame>) -> &'a mut Vec<Op> {
    match stack.last_mut() {
        Some(frame) => &mut frame.ops,
        None => root,
    }
}

/// Append literal text, merging with a trailing text op.
fn push_text(ops: &mut Vec<Op>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Op::Text(last)) = ops.last_mut() {
        last.push_str(text);
    } else {
        ops.push(Op::Text(text.to_string()));
    }
}

fn handle_tag(tag: Tag<'_>, root: &mut Vec<Op>, stack: &mut Vec<Frame>) -> Result<(), TemplateError> {
    if tag.lead_backslashes > 0 {
        let backslashes = "\\".repeat(tag.lead_backslashes);
        push_text(current(root, stack), &backslashes);
    }

    if tag.escaped {
        // Escaped tag is literal output, inner spacing preserved
        let literal = format!("{{{{{}}}}}", tag.raw);
        push_text(current(root, stack), &literal);
        return Ok(());
    }

    let trimmed = tag.raw.trim();
    if trimmed.is_empty() {
        return Err(TemplateError::MalformedSyntax {
            message: "Empty placeholder".to_string(),
            line: tag.line,
        });
    }

    if let Some(rest) = trimmed.strip_prefix("each ") {
        let (key, var) = parse_each_args(rest, tag.line)?;
        stack.push(Frame {
            kind: BlockKind::Each { key, var },
            line: tag.line,
            ops: Vec::new(),
        });
        return Ok(());
    }

    if let Some(rest) = trimmed.strip_prefix("if ") {
        let key = rest.trim();
        if key.is_empty() {
            return Err(TemplateError::MalformedSyntax {
                message: "Invalid if syntax: expected a key after 'if'".to_string(),
                line: tag.line,
            });
        }
        stack.push(Frame {
            kind: BlockKind::If {
                key: key.to_string(),
            },
            line: tag.line,
            ops: Vec::new(),
        });
        return Ok(());
    }

    if let Some(rest) = trimmed.strip_prefix('/') {
        return close_block(rest.trim(), tag.line, root, stack);
    }

    current(root, stack).push(Op::Emit {
        key: trimmed.to_string(),
        line: tag.line,
    });
    Ok(())
}

fn close_block(
    keyword: &str,
    line: usize,
    root: &mut Vec<Op>,
    stack: &mut Vec<Frame>,
) -> Result<(), TemplateError> {
    let frame = stack.pop().ok_or_else(|| TemplateError::MalformedSyntax {
        message: format!(
            "Unexpected {{{{/{}}}}} without matching {{{{{}}}}}",
            keyword, keyword
        ),
        line,
    })?;

    let op = match (frame.kind, keyword) {
        (BlockKind::Each { key, var }, "each") => Op::Each {
            key,
            var,
            line: frame.line,
            body: frame.ops,
        },
        (BlockKind::If { key }, "if") => Op::If {
            key,
            line: frame.line,
            body: frame.ops,
        },
        (kind, _) => {
            let expected = match kind {
                BlockKind::Each { .. } => "/each",
                BlockKind::If { .. } => "/if",
            };
            return Err(TemplateError::MalformedSyntax {
                message: format!(
                    "Mismatched {{{{/{}}}}}: expected {{{{{}}}}}",
                    keyword, expected
                ),
                line,
            });
        }
    };

    current(root, stack).push(op);
    Ok(())
}

/// Parse each loop syntax: "items |item|" → (key, var_name)
fn parse_each_args(rest: &str, line: usize) -> Result<(String, String), TemplateError> {
    let pipe = rest.find('|').ok_or_else(|| TemplateError::MalformedSyntax {
        message: format!("Invalid each syntax: expected |var| in 'each {}'", rest),
        line,
    })?;

    let key = rest[..pipe].trim();
    let var_end = rest[pipe + 1..]
        .find('|')
        .ok_or_else(|| TemplateError::MalformedSyntax {
            message: format!("Invalid each syntax: unclosed |var| in 'each {}'", rest),
            line,
        })?;
    let var = rest[pipe + 1..pipe + 1 + var_end].trim();

    if key.is_empty() || var.is_empty() {
        return Err(TemplateError::MalformedSyntax {
            message: format!("Invalid each syntax: empty key or variable in 'each {}'", rest),
            line,
        });
    }

    Ok((key.to_string(), var.to_string()))
}
