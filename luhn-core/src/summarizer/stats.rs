//! Document statistics.

use crate::analyzer::{is_blank, sentences, strip_markup};
use crate::summarizer::types::Summarizer;

/// A snapshot of what the summarizer sees in one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentStats {
    /// Number of sentences after markup stripping.
    pub sentences: usize,
    /// Number of word tokens, repeats included.
    pub words: usize,
    /// Distinct words that passed the stop-word and length filters.
    pub candidates: usize,
    /// Distinct words selected as significant.
    pub significant: usize,
}

impl Summarizer {
    /// Returns statistics for `text`.
    pub fn stats(&self, text: &str) -> DocumentStats {
        let content = strip_markup(text);
        if is_blank(&content) {
            return DocumentStats::default();
        }

        let mut words = 0usize;
        let normalized = self.normalizer.normalize(&content);
        self.tokenizer.tokenize(&normalized, |_, _| words += 1);
        let significant = self.significant_words(&content);

        DocumentStats {
            sentences: sentences(&content).len(),
            words,
            candidates: significant.candidates(),
            significant: significant.len(),
        }
    }
}

impl core::fmt::Display for DocumentStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} sentences, {} words, {} candidate words, {} significant",
            self.sentences, self.words, self.candidates, self.significant
        )
    }
}
