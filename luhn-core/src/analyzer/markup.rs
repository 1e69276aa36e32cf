//! Markup stripping.
//!
//! Reduces HTML-ish content to its plain text before sentence splitting.
//! This is a scanner, not a parser: it only needs to find where tags start
//! and end.
//!
//! ## Rules
//!
//! - `<script>` and `<style>` elements are removed together with their contents
//! - `<!-- ... -->` comments are removed
//! - Any other `<` followed by a letter, `/`, `!` or `?` starts a tag that runs
//!   through the next `>` outside quoted attribute values; an unterminated tag
//!   swallows the rest of the input
//! - A `<` that does not start a tag (`a < b`) is kept
//! - Entities (`&amp;`) are left undecoded
//! - The result is trimmed of surrounding spaces, tabs, newlines, NUL and VT

use memchr::{memchr, memchr3, memmem};

/// Elements whose contents are dropped along with their tags.
const RAW_TEXT_ELEMENTS: [&[u8]; 2] = [b"script", b"style"];

/// Characters trimmed from both ends of the stripped text.
const TRIM_CHARS: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Strips markup and returns a new String.
///
/// # Examples
///
/// ```
/// use luhn_core::analyzer::strip_markup;
///
/// assert_eq!(strip_markup("<p>Hello <b>world</b>.</p>\n"), "Hello world.");
/// ```
pub fn strip_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    strip_markup_into(input, &mut out);
    out
}

/// Strips markup into an existing buffer, clearing it first.
pub fn strip_markup_into(input: &str, out: &mut String) {
    out.clear();
    out.reserve(input.len());

    let bytes = input.as_bytes();
    let mut cursor = 0usize;

    while let Some(rel) = memchr(b'<', &bytes[cursor..]) {
        let lt = cursor + rel;
        out.push_str(&input[cursor..lt]);

        match markup_end(bytes, lt) {
            Some(end) => cursor = end,
            None => {
                out.push('<');
                cursor = lt + 1;
            }
        }
    }
    out.push_str(&input[cursor..]);

    trim_in_place(out);
}

/// Returns `true` if the text is empty once surrounding blanks are trimmed.
#[inline]
pub fn is_blank(text: &str) -> bool {
    text.trim_matches(&TRIM_CHARS[..]).is_empty()
}

/// Returns the byte index just past the markup starting at `lt`,
/// or `None` if the `<` is literal text.
fn markup_end(bytes: &[u8], lt: usize) -> Option<usize> {
    let rest = &bytes[lt..];
    let next = *rest.get(1)?;

    if rest.starts_with(b"<!--") {
        let end = memmem::find(&rest[4..], b"-->")
            .map_or(bytes.len(), |pos| lt + 4 + pos + 3);
        return Some(end);
    }

    if !(next.is_ascii_alphabetic() || matches!(next, b'/' | b'!' | b'?')) {
        return None;
    }

    let tag_close = tag_end(bytes, lt + 1);

    for name in RAW_TEXT_ELEMENTS {
        if opens_element(rest, name) {
            return Some(closing_tag_end(bytes, tag_close, name));
        }
    }

    Some(tag_close)
}

/// Returns the byte index just past the `>` closing a tag whose body starts
/// at `from`. A `>` inside a quoted attribute value does not close the tag.
/// Runs to the end of input when the tag or a quote is never closed.
fn tag_end(bytes: &[u8], from: usize) -> usize {
    let mut cursor = from;
    while let Some(rel) = memchr3(b'>', b'"', b'\'', &bytes[cursor..]) {
        let at = cursor + rel;
        let quote = bytes[at];
        if quote == b'>' {
            return at + 1;
        }
        match memchr(quote, &bytes[at + 1..]) {
            Some(len) => cursor = at + 1 + len + 1,
            None => return bytes.len(),
        }
    }
    bytes.len()
}

/// Checks whether `tag` (starting at `<`) opens the element `name`.
fn opens_element(tag: &[u8], name: &[u8]) -> bool {
    let Some(candidate) = tag.get(1..1 + name.len()) else {
        return false;
    };
    if !candidate.eq_ignore_ascii_case(name) {
        return false;
    }
    match tag.get(1 + name.len()) {
        None => true,
        Some(&b) => b == b'>' || b == b'/' || b.is_ascii_whitespace(),
    }
}

/// Finds the end of `</name ...>` at or after `from`, case-insensitively.
/// Runs to the end of input when the element is never closed.
fn closing_tag_end(bytes: &[u8], from: usize, name: &[u8]) -> usize {
    let mut cursor = from;
    while cursor < bytes.len() {
        let Some(rel) = memchr(b'<', &bytes[cursor..]) else {
            break;
        };
        let lt = cursor + rel;
        let rest = &bytes[lt..];
        if rest.get(1) == Some(&b'/') && opens_element(&rest[1..], name) {
            return tag_end(bytes, lt + 1);
        }
        cursor = lt + 1;
    }
    bytes.len()
}

fn trim_in_place(out: &mut String) {
    let end = out.trim_end_matches(&TRIM_CHARS[..]).len();
    out.truncate(end);
    let start = out.len() - out.trim_start_matches(&TRIM_CHARS[..]).len();
    out.drain(..start);
}
