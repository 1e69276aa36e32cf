//! Word normalization.
//!
//! Turns arbitrary text into the form the word tokenizer consumes: lowercase,
//! letters and numbers only, single ASCII spaces between words.

use std::sync::LazyLock;

use regex::Regex;

/// Table value for ASCII bytes that are deleted outright.
const DROP: u8 = 0x00;
/// Table value for ASCII whitespace (word separator).
const SEP: u8 = b' ';

/// Unicode general categories L* and N*. `char::is_alphanumeric` also admits
/// `Other_Alphabetic` marks (e.g. Devanagari vowel signs), which are deleted.
static LETTER_OR_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}]").expect("valid letter/number class regex"));

/// Maps each ASCII byte to its lowercase form, `SEP`, or `DROP`.
const ASCII_CLASS: [u8; 128] = build_ascii_class();

const fn build_ascii_class() -> [u8; 128] {
    let mut table = [DROP; 128];
    let mut b = 0usize;
    while b < 128 {
        let byte = b as u8;
        table[b] = match byte {
            b'A'..=b'Z' => byte + 32,
            b'a'..=b'z' | b'0'..=b'9' => byte,
            b'\t' | b'\n' | 0x0B | 0x0C | b'\r' | b' ' => SEP,
            _ => DROP,
        };
        b += 1;
    }
    table
}

/// Word normalizer.
///
/// Performs the following operations:
/// - Deletes every character that is not a Unicode letter, number or whitespace.
///   Deletion happens in place, so `"don't"` becomes `"dont"`.
/// - Converts the remaining characters to lowercase (Unicode-aware)
/// - Collapses whitespace runs into single ASCII spaces
/// - Drops leading and trailing whitespace
///
/// The output satisfies the [`Tokenizer`](super::Tokenizer) input contract.
///
/// # Examples
///
/// ```
/// use luhn_core::analyzer::TextNormalizer;
///
/// let normalizer = TextNormalizer::new();
/// assert_eq!(normalizer.normalize("  Don't PANIC,  friend!  "), "dont panic friend");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Creates a new normalizer.
    pub const fn new() -> Self {
        Self
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity.
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        let bytes = input.as_bytes();
        let mut i = 0usize;
        let mut pending_sep = false;

        while i < bytes.len() {
            let b = bytes[i];

            if b < 128 {
                match ASCII_CLASS[b as usize] {
                    DROP => {}
                    SEP => pending_sep = true,
                    lowered => {
                        flush_separator(out, &mut pending_sep);
                        out.push(lowered as char);
                    }
                }
                i += 1;
                continue;
            }

            let Some(ch) = input[i..].chars().next() else {
                break;
            };
            let start = i;
            i += ch.len_utf8();

            if ch.is_whitespace() {
                pending_sep = true;
            } else if ch.is_alphanumeric() && LETTER_OR_NUMBER.is_match(&input[start..i]) {
                flush_separator(out, &mut pending_sep);
                out.extend(ch.to_lowercase());
            }
        }
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}

/// Emits a pending separator unless nothing has been written yet.
#[inline(always)]
fn flush_separator(out: &mut String, pending: &mut bool) {
    if *pending && !out.is_empty() {
        out.push(' ');
    }
    *pending = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(input: &str) -> String {
        TextNormalizer::new().normalize(input)
    }

    #[test]
    fn ascii_basic_lowercase() {
        assert_eq!(norm("HELLO"), "hello");
        assert_eq!(norm("HeLlO"), "hello");
        assert_eq!(norm("123 ABC!"), "123 abc");
    }

    #[test]
    fn ascii_full_alphabet() {
        let upper: String = (b'A'..=b'Z').map(|b| b as char).collect();
        let lower: String = (b'a'..=b'z').map(|b| b as char).collect();
        assert_eq!(norm(&upper), lower);
    }

    #[test]
    fn punctuation_deleted_in_place() {
        assert_eq!(norm("don't"), "dont");
        assert_eq!(norm("foo-bar_baz"), "foobarbaz");
        assert_eq!(norm("e.g."), "eg");
        assert_eq!(norm("3.14"), "314");
    }

    #[test]
    fn punctuation_between_spaces_leaves_one_separator() {
        assert_eq!(norm("cats - dogs"), "cats dogs");
        assert_eq!(norm("a , b"), "a b");
    }

    #[test]
    fn whitespace_collapse() {
        assert_eq!(norm("hello   world"), "hello world");
        assert_eq!(norm("hello\t\nworld"), "hello world");
        assert_eq!(norm("hello \r\n world"), "hello world");
    }

    #[test]
    fn leading_and_trailing_whitespace_removed() {
        assert_eq!(norm("   hello"), "hello");
        assert_eq!(norm("hello   "), "hello");
        assert_eq!(norm("  ...hello...  "), "hello");
    }

    #[test]
    fn only_whitespace_or_punctuation() {
        assert_eq!(norm("   "), "");
        assert_eq!(norm("\n\t\r"), "");
        assert_eq!(norm("?! ... --"), "");
    }

    #[test]
    fn no_double_spaces() {
        let out = norm("hello , , world  -  test");
        assert!(!out.contains("  "));
        assert_eq!(out, "hello world test");
    }

    #[test]
    fn unicode_lowercase() {
        assert_eq!(norm("ПРИВЕТ"), "привет");
        assert_eq!(norm("ÜNITED"), "ünited");
        assert_eq!(norm("ΆΈΉ"), "άέή");
        assert_eq!(norm("ЁЖЗ"), "ёжз");
    }

    #[test]
    fn unicode_whitespace_separates() {
        assert_eq!(norm("hello\u{00A0}world"), "hello world");
        assert_eq!(norm("hello\u{3000}world"), "hello world");
    }

    #[test]
    fn unicode_punctuation_deleted() {
        assert_eq!(norm("«Привет», мир…"), "привет мир");
        assert_eq!(norm("l’homme"), "lhomme");
    }

    #[test]
    fn non_latin_scripts_pass_through() {
        assert_eq!(norm("你好世界"), "你好世界");
        assert_eq!(norm("مرحبا"), "مرحبا");
        assert_eq!(norm("한글"), "한글");
    }

    #[test]
    fn combining_marks_deleted() {
        // KA + vowel sign I (Mc, Other_Alphabetic)
        assert_eq!(norm("\u{915}\u{93F}"), "\u{915}");
        assert_eq!(norm("किताब"), "कतब");
        // e + combining acute (Mn)
        assert_eq!(norm("e\u{301}te"), "ete");
    }

    #[test]
    fn other_alphabetic_symbols_deleted() {
        // CIRCLED LATIN CAPITAL LETTER A is So, not a letter.
        assert_eq!(norm("\u{24B6} b"), "b");
    }

    #[test]
    fn numbers_kept() {
        assert_eq!(norm("Route 66"), "route 66");
        assert_eq!(norm("x² + ½"), "x² ½");
    }

    #[test]
    fn emoji_and_symbols_removed() {
        assert_eq!(norm("Hello 🌍 World"), "hello world");
        assert_eq!(norm("$100 & €5"), "100 5");
    }

    #[test]
    fn zero_width_and_control_chars_removed() {
        assert_eq!(norm("hello\u{200B}world"), "helloworld");
        assert_eq!(norm("hello\x01\x02world"), "helloworld");
        assert_eq!(norm("a\0b"), "ab");
    }

    #[test]
    fn expanding_lowercase_does_not_panic() {
        let result = norm("İstanbul");
        assert!(result.starts_with('i'));
        assert!(result.ends_with("stanbul"));
    }

    #[test]
    fn idempotent() {
        let n = TextNormalizer::new();
        let samples = ["Hello, World!", "foo   bar", "ÜBER Café", "don't stop"];

        for s in samples {
            let once = n.normalize(s);
            let twice = n.normalize(&once);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn normalize_into_reuses_capacity() {
        let normalizer = TextNormalizer::new();
        let mut buf = String::with_capacity(64);
        let cap = buf.capacity();

        normalizer.normalize_into("HELLO", &mut buf);
        assert_eq!(buf, "hello");
        assert_eq!(buf.capacity(), cap);

        normalizer.normalize_into("WORLD!", &mut buf);
        assert_eq!(buf, "world");
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn empty_input() {
        assert_eq!(norm(""), "");
    }

    #[test]
    fn very_long_ascii() {
        let input = "Ab. ".repeat(2500);
        let out = norm(&input);
        assert_eq!(out.split(' ').count(), 2500);
        assert!(out.split(' ').all(|w| w == "ab"));
    }
}
