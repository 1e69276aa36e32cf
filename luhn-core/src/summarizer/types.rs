//! Summarizer type and construction.

use luhn_types::{Language, SummarizerConfig};

use crate::analyzer::{StopWords, TextNormalizer, Tokenizer};
use crate::summarizer::cluster::ClusterScorer;

/// Luhn extractive summarizer.
///
/// Holds the stop-word table for one language, loaded at construction and
/// never mutated afterwards. All per-document state lives on the stack of a
/// single call, so one instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct Summarizer {
    pub(crate) config: SummarizerConfig,
    pub(crate) stop_words: StopWords,
    pub(crate) normalizer: TextNormalizer,
    pub(crate) tokenizer: Tokenizer,
    pub(crate) scorer: ClusterScorer,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::with_config(SummarizerConfig::default())
    }
}

impl Summarizer {
    /// Creates a summarizer for `language` with the default sentence count.
    pub fn new(language: Language) -> Self {
        Self::with_config(SummarizerConfig {
            language,
            ..SummarizerConfig::default()
        })
    }

    /// Creates a summarizer from a full configuration.
    ///
    /// The sentence count is checked when [`summarize_default`] runs, not here.
    ///
    /// [`summarize_default`]: Summarizer::summarize_default
    pub fn with_config(config: SummarizerConfig) -> Self {
        Self {
            config,
            stop_words: StopWords::for_language(config.language),
            normalizer: TextNormalizer::new(),
            tokenizer: Tokenizer::new(),
            scorer: ClusterScorer::new(),
        }
    }

    /// Language of the loaded stop-word table.
    #[inline(always)]
    #[must_use]
    pub fn language(&self) -> Language {
        self.config.language
    }

    /// The configuration this summarizer was built with.
    #[inline(always)]
    #[must_use]
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// The stop-word table in use.
    #[inline(always)]
    #[must_use]
    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }
}
