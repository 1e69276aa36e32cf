//! Public API for summarizing and ranking documents.

use luhn_types::{validate_sentence_count, ScoredSentence, SummaryError};
use tracing::{debug, trace};

use crate::analyzer::{is_blank, sentences, strip_markup};
use crate::summarizer::significance::SignificantWords;
use crate::summarizer::types::Summarizer;

impl Summarizer {
    /// Summarizes `text` down to at most `sentence_count` sentences.
    ///
    /// Markup is stripped first. Documents with no more sentences than
    /// requested come back whole (markup-stripped); blank documents give an
    /// empty summary. Otherwise the highest-scoring sentences are joined with
    /// single spaces in their original order.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidSentenceCount` if `sentence_count` is zero.
    pub fn summarize(&self, text: &str, sentence_count: usize) -> Result<String, SummaryError> {
        validate_sentence_count(sentence_count)?;

        let content = strip_markup(text);
        if is_blank(&content) {
            debug!("blank document after markup stripping");
            return Ok(String::new());
        }

        let sentences = sentences(&content);
        let total = sentences.len();
        if total <= sentence_count {
            debug!(total, sentence_count, "document within summary length; returning it whole");
            return Ok(content);
        }

        let significant = self.significant_words(&content);
        debug!(
            total,
            candidates = significant.candidates(),
            significant = significant.len(),
            language = %self.language(),
            "ranking sentences"
        );

        let mut ranked = self.score_sentences(&sentences, &significant);

        // Stable descending sort: equal scores keep document order.
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(sentence_count);
        ranked.sort_by_key(|s| s.index);

        let summary = ranked
            .iter()
            .map(|s| sentences[s.index])
            .collect::<Vec<_>>()
            .join(" ");

        Ok(summary)
    }

    /// Summarizes with the configured sentence count.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidSentenceCount` if the configured count is zero.
    pub fn summarize_default(&self, text: &str) -> Result<String, SummaryError> {
        self.summarize(text, self.config.sentence_count)
    }

    /// Scores every sentence of `text`, returned in document order.
    ///
    /// Unlike [`summarize`](Summarizer::summarize) this always scores, even
    /// for documents shorter than a summary.
    pub fn rank(&self, text: &str) -> Vec<ScoredSentence> {
        let content = strip_markup(text);
        if is_blank(&content) {
            return Vec::new();
        }

        let sentences = sentences(&content);
        let significant = self.significant_words(&content);
        self.score_sentences(&sentences, &significant)
    }

    /// Selects the significant words of markup-free content.
    pub fn significant_words(&self, content: &str) -> SignificantWords {
        let normalized = self.normalizer.normalize(content);
        let mut tokens = Vec::new();
        self.tokenizer.tokenize(&normalized, |word, _| tokens.push(word));
        SignificantWords::select(tokens, &self.stop_words)
    }

    pub(crate) fn score_sentences(
        &self,
        sentences: &[&str],
        significant: &SignificantWords,
    ) -> Vec<ScoredSentence> {
        let mut buf = String::with_capacity(256);

        sentences
            .iter()
            .enumerate()
            .map(|(index, sentence)| {
                let score = self.scorer.score_sentence_with(sentence, significant, &mut buf);
                trace!(index, score, "scored sentence");
                ScoredSentence::new(index, score)
            })
            .collect()
    }
}
