//! Core types and errors for the Luhn summarizer.
//!
//! This crate provides the value types shared between the summarization
//! engine and its callers. Keeping types separate ensures:
//!
//! - **Small surface**: hosts can depend on config and errors without the engine
//! - **Cross-crate compatibility**: core and CLI share the same types
//! - **Clean boundaries**: No circular dependencies between crates

#![warn(missing_docs)]

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of sentences in a generated summary.
pub const DEFAULT_SENTENCE_COUNT: usize = 3;

/// Language of the stop-word table used for significance scoring.
///
/// Parsing never fails: any code other than `ru` selects English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    /// English stop words (`en`).
    #[default]
    English,
    /// Russian stop words (`ru`).
    Russian,
}

impl Language {
    /// Resolves a language code, falling back to English for unknown codes.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "ru" => Language::Russian,
            _ => Language::English,
        }
    }

    /// Returns the two-letter code for this language.
    #[inline(always)]
    pub const fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
        }
    }

    /// Returns `true` if `code` names a supported table without falling back.
    pub fn is_supported(code: &str) -> bool {
        matches!(code, "en" | "ru")
    }
}

impl FromStr for Language {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_code(s))
    }
}

impl From<String> for Language {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.code().to_owned()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A sentence position paired with its Luhn score.
///
/// Ordered by score, then by index with earlier sentences ranking higher,
/// so sorting in descending order keeps document order among ties.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoredSentence {
    /// 0-based position of the sentence in the document.
    pub index: usize,
    /// Best cluster score of the sentence (0.0 when it has no significant words).
    pub score: f64,
}

impl PartialEq for ScoredSentence {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.score == other.score
    }
}

impl Eq for ScoredSentence {}

impl PartialOrd for ScoredSentence {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoredSentence {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        match self.score.total_cmp(&other.score) {
            core::cmp::Ordering::Equal => other.index.cmp(&self.index),
            ord => ord,
        }
    }
}

impl ScoredSentence {
    /// Creates a new scored sentence.
    #[inline(always)]
    pub const fn new(index: usize, score: f64) -> Self {
        Self { index, score }
    }
}

impl fmt::Display for ScoredSentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sentence={} score={:.3}", self.index, self.score)
    }
}

/// Errors raised at the summarizer boundary.
///
/// The algorithm itself is total over its inputs; these only reject
/// invalid configuration or empty on-demand requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SummaryError {
    /// The requested sentence count was zero.
    #[error("invalid sentence count: {count} (must be at least 1)")]
    InvalidSentenceCount {
        /// The rejected count.
        count: usize,
    },
    /// An on-demand request carried no content to summarize.
    #[error("no content provided")]
    EmptyContent,
}

/// Summarizer configuration options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Stop-word table to use. Default: English.
    pub language: Language,
    /// Target number of sentences in the summary. Default: 3.
    pub sentence_count: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            language: Language::English,
            sentence_count: DEFAULT_SENTENCE_COUNT,
        }
    }
}

impl SummarizerConfig {
    /// Creates a configuration for the given language and sentence count.
    pub const fn new(language: Language, sentence_count: usize) -> Self {
        Self {
            language,
            sentence_count,
        }
    }

    /// Checks that the sentence count is positive.
    ///
    /// # Errors
    /// Returns `SummaryError::InvalidSentenceCount` if `sentence_count` is zero.
    pub const fn validate(&self) -> Result<(), SummaryError> {
        validate_sentence_count(self.sentence_count)
    }
}

/// Rejects a zero sentence count.
///
/// # Errors
/// Returns `SummaryError::InvalidSentenceCount` if `count` is zero.
#[inline]
pub const fn validate_sentence_count(count: usize) -> Result<(), SummaryError> {
    if count == 0 {
        Err(SummaryError::InvalidSentenceCount { count })
    } else {
        Ok(())
    }
}
