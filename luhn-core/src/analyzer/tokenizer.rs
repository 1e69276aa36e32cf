//! Streaming Word Tokenizer
//!
//! Splits normalized text into word tokens. It's the last stage of the
//! analyzer pipeline, taking the output of the
//! [`TextNormalizer`](super::TextNormalizer) and breaking it into the
//! positional words that frequency counting and cluster scoring work on.
//!
//! ## What It Does
//!
//! Given normalized input like `"the cat sat on the mat"`, it emits each word
//! with its position within that span:
//!
//! ```ignore
//! ("the", 0)
//! ("cat", 1)
//! ("sat", 2)
//! ("on", 3)
//! ("the", 4)
//! ("mat", 5)
//! ```
//!
//! Repeated words are emitted every time they occur; nothing is deduplicated.
//!
//! ## Key Features
//!
//! - **Zero Allocation**: Tokens are slices of the original string, not new allocations
//! - **Streaming**: Uses a callback to emit tokens, no intermediate collection
//! - **Fast**: `memchr` scan for ASCII space (0x20) splitting
//!
//! ## The Input Contract
//!
//! The tokenizer expects **pre-normalized** input:
//! - No leading or trailing whitespace
//! - Words separated by exactly one ASCII space
//!
//! Violations panic in debug builds.

use memchr::memchr_iter;

use super::normalizer::TextNormalizer;

/// Streaming tokenizer - splits normalized text into positional words.
///
/// ## Example
///
/// ```
/// use luhn_core::analyzer::Tokenizer;
///
/// let tokenizer = Tokenizer::new();
/// let mut count = 0;
///
/// tokenizer.tokenize("hello world foo", |_text, _pos| {
///     count += 1;
/// });
///
/// assert_eq!(count, 3);
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a new tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes normalized input and emits `(text, position)`.
    ///
    /// Position is `u32`. After emitting a token at position `u32::MAX`,
    /// further emissions stop.
    #[inline(always)]
    pub fn tokenize<'n, F>(&self, normalized: &'n str, mut emit: F)
    where
        F: FnMut(&'n str, u32),
    {
        let bytes = normalized.as_bytes();

        debug_assert!(
            bytes.first().is_none_or(|&b| b != b' '),
            "tokenizer: leading whitespace: normalizer contract violated"
        );

        debug_assert!(
            bytes.last().is_none_or(|&b| b != b' '),
            "tokenizer: trailing whitespace: normalizer contract violated"
        );

        debug_assert!(
            !normalized.contains("  "),
            "tokenizer: consecutive spaces: normalizer contract violated"
        );

        if bytes.is_empty() {
            return;
        }

        let mut start = 0usize;
        let mut pos = 0u32;

        for i in memchr_iter(b' ', bytes) {
            if start < i {
                // Splitting on an ASCII space always lands on a char boundary.
                emit(&normalized[start..i], pos);
                if pos == u32::MAX {
                    return;
                }
                pos += 1;
            }
            start = i + 1;
        }

        if start < bytes.len() {
            emit(&normalized[start..], pos);
        }
    }

    /// Collects the tokens of normalized input in order.
    pub fn collect<'n>(&self, normalized: &'n str) -> Vec<&'n str> {
        let mut out = Vec::new();
        self.tokenize(normalized, |text, _| out.push(text));
        out
    }
}

/// Normalizes arbitrary text and returns its words as owned strings.
///
/// # Examples
///
/// ```
/// use luhn_core::analyzer::tokenize_words;
///
/// assert_eq!(tokenize_words("Don't STOP, now!"), vec!["dont", "stop", "now"]);
/// ```
pub fn tokenize_words(text: &str) -> Vec<String> {
    let normalized = TextNormalizer::new().normalize(text);
    Tokenizer::new()
        .collect(&normalized)
        .into_iter()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<(&str, u32)> {
        let mut out = Vec::new();
        Tokenizer::new().tokenize(input, |text, pos| {
            out.push((text, pos));
        });
        out
    }

    #[test]
    fn single_word() {
        let out = collect("hello");
        assert_eq!(out, vec![("hello", 0)]);
    }

    #[test]
    fn two_words() {
        let out = collect("hello world");
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].0, "hello");
        assert_eq!(out[1].0, "world");
    }

    #[test]
    fn positions_are_sequential() {
        let out = collect("the quick brown fox");
        assert_eq!(out.len(), 4);
        for (i, (_, pos)) in out.iter().enumerate() {
            assert_eq!(*pos, i as u32);
        }
    }

    #[test]
    fn repeated_words_not_deduplicated() {
        let out = collect("the cat and the hat");
        let thes: Vec<u32> = out.iter().filter(|(t, _)| *t == "the").map(|(_, p)| *p).collect();
        assert_eq!(thes, vec![0, 3]);
    }

    #[test]
    fn empty_emits_nothing() {
        assert!(collect("").is_empty());
    }

    #[test]
    fn unicode_words() {
        let out = collect("привет мир café");
        assert_eq!(out, vec![("привет", 0), ("мир", 1), ("café", 2)]);
    }

    #[test]
    fn tokens_are_slices_of_input() {
        let input = String::from("hello world");
        let base = input.as_ptr() as usize;
        let end = base + input.len();

        Tokenizer::new().tokenize(&input, |text, _| {
            let ptr = text.as_ptr() as usize;
            assert!(ptr >= base && ptr < end);
        });
    }

    #[test]
    fn tokenizer_is_reusable() {
        let t = Tokenizer::new();

        let mut n = 0usize;
        t.tokenize("hello world", |_, _| n += 1);
        assert_eq!(n, 2);

        n = 0;
        t.tokenize("one two three", |_, _| n += 1);
        assert_eq!(n, 3);
    }

    #[test]
    fn composes_with_normalizer() {
        let normalized = TextNormalizer::new().normalize("  The CAT -- sat!  ");
        assert_eq!(Tokenizer::new().collect(&normalized), vec!["the", "cat", "sat"]);
    }

    #[test]
    fn tokenize_words_handles_raw_text() {
        assert_eq!(tokenize_words(""), Vec::<String>::new());
        assert_eq!(tokenize_words("...!?"), Vec::<String>::new());
        assert_eq!(tokenize_words("Сегодня, 5 мая."), vec!["сегодня", "5", "мая"]);
    }
}
