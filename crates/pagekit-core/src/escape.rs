//! HTML escaping helper
//!
//! Interpolated template values are emitted raw; callers escape
//! untrusted text themselves with [`escape_html`] before handing it to
//! the renderer.

use std::borrow::Cow;

/// Replace `&`, `<`, `>` and `"` with their entity equivalents.
///
/// Borrows the input unchanged when it contains none of the four
/// characters. Total over all strings; there is no failure case.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    let first = match s.bytes().position(needs_escape) {
        Some(pos) => pos,
        None => return Cow::Borrowed(s),
    };

    let mut out = String::with_capacity(s.len() + 8);
    out.push_str(&s[..first]);
    for c in s[first..].chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

fn needs_escape(byte: u8) -> bool {
    matches!(byte, b'&' | b'<' | b'>' | b'"')
}
