//! Sentence splitting.
//!
//! A punctuation heuristic: a sentence ends at `.`, `?` or `!` when the mark is
//! followed by whitespace. The mark stays with its sentence and the whitespace
//! run is consumed. Abbreviations, decimals and quotes get no special handling,
//! so `Dr. Smith` splits after `Dr.` while `3.14` and `"end." she said` do not.

use memchr::memchr3_iter;

/// Splits markup-free text into sentences, emitting each as a slice of the input.
///
/// Empty pieces are never emitted. Sentences are emitted in document order.
pub fn split_sentences<'t, F>(text: &'t str, mut emit: F)
where
    F: FnMut(&'t str),
{
    let bytes = text.as_bytes();
    let mut start = 0usize;

    for i in memchr3_iter(b'.', b'?', b'!', bytes) {
        let after = i + 1;
        let gap = whitespace_run(&text[after..]);
        if gap == 0 {
            continue;
        }

        emit(&text[start..after]);
        start = after + gap;
    }

    if start < text.len() {
        emit(&text[start..]);
    }
}

/// Collects the sentences of `text` into a vector.
///
/// # Examples
///
/// ```
/// use luhn_core::analyzer::sentences;
///
/// assert_eq!(
///     sentences("It rained. Did it stop? No!  Not yet"),
///     vec!["It rained.", "Did it stop?", "No!", "Not yet"]
/// );
/// ```
pub fn sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    split_sentences(text, |s| out.push(s));
    out
}

/// Byte length of the whitespace run at the start of `text`.
#[inline]
fn whitespace_run(text: &str) -> usize {
    text.char_indices()
        .find(|&(_, c)| !c.is_whitespace())
        .map_or(text.len(), |(i, _)| i)
}
