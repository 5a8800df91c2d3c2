//! Tokenization for the template engine
//!
//! Splits template source into literal text pieces and `{{...}}` tags
//! in a single forward pass. Backslash-escape bookkeeping happens here:
//! a run of backslashes immediately before `{{` collapses by half, and
//! an odd run marks the tag as escaped (literal).

use crate::template::error::TemplateError;

/// One piece of template source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Piece<'a> {
    /// Literal text, emitted verbatim.
    Text(&'a str),
    /// A `{{...}}` tag.
    Tag(Tag<'a>),
}

/// A `{{...}}` tag with position and escape metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Tag<'a> {
    /// Inner text between the braces, as written (untrimmed).
    pub raw: &'a str,
    /// Line number of the opening braces (for error messages).
    pub line: usize,
    /// Odd backslash count before `{{`: the tag is literal text.
    pub escaped: bool,
    /// Literal backslashes to emit before the tag (half the run,
    /// rounded down).
    pub lead_backslashes: usize,
}

/// Iterator over the pieces of a template string.
///
/// Forward-only: each byte is visited once, and an unclosed `{{`
/// surfaces as a `MalformedSyntax` error rather than being skipped, so
/// unbalanced markers fail at compile time.
pub(crate) struct Tokenizer<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0, line: 1 }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Piece<'a>, TemplateError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.src.len() {
            return None;
        }
        let rest = &self.src[self.pos..];

        let Some(open) = rest.find("{{") else {
            // No more tags; the remainder is literal text
            self.pos = self.src.len();
            self.line += count_newlines(rest);
            return Some(Ok(Piece::Text(rest)));
        };

        let backslashes = count_backslashes_before(rest, open);
        let text_end = open - backslashes;
        if text_end > 0 {
            // Emit the text up to the backslash run; the run itself is
            // consumed together with the tag on the next call
            let text = &rest[..text_end];
            self.pos += text_end;
            self.line += count_newlines(text);
            return Some(Ok(Piece::Text(text)));
        }

        let line = self.line;
        let inner_start = open + 2;
        let Some(close) = rest[inner_start..].find("}}") else {
            return Some(Err(TemplateError::MalformedSyntax {
                message: "Unclosed placeholder".to_string(),
                line,
            }));
        };

        let raw = &rest[inner_start..inner_start + close];
        self.line += count_newlines(raw);
        self.pos += inner_start + close + 2;

        Some(Ok(Piece::Tag(Tag {
            raw,
            line,
            escaped: backslashes % 2 == 1,
            lead_backslashes: backslashes / 2,
        })))
    }
}

/// Count backslashes immediately before a position
fn count_backslashes_before(text: &str, pos: usize) -> usize {
    let bytes = text.as_bytes();
    let mut count = 0;
    while count < pos && bytes[pos - count - 1] == b'\\' {
        count += 1;
    }
    count
}

/// Count newlines in text
pub(crate) fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}
