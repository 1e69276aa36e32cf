//! Significant-word selection.
//!
//! A word is significant when it survives the stop-word and length filters
//! and ranks among the most frequent tenth of the distinct surviving words.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::analyzer::StopWords;

/// Words must be longer than this many characters to be significant.
pub const MAX_SHORT_WORD_CHARS: usize = 2;

/// Percentage of distinct candidate words kept as significant (rounded up).
pub const SIGNIFICANT_PERCENT: usize = 10;

/// Number of significant words for `distinct` candidates:
/// `ceil(10% × distinct)`, at least 1 when there is any candidate.
#[inline]
pub const fn significant_count(distinct: usize) -> usize {
    // Any non-zero count rounds up to at least 1.
    (distinct * SIGNIFICANT_PERCENT).div_ceil(100)
}

/// Returns `true` if `word` may be counted as a significance candidate.
#[inline]
pub fn is_candidate(word: &str, stop_words: &StopWords) -> bool {
    word.chars().nth(MAX_SHORT_WORD_CHARS).is_some() && !stop_words.contains(word)
}

/// Counts candidate words and ranks them by frequency, highest first.
///
/// Every occurrence counts. Words with equal frequency keep the order in
/// which they first appeared.
pub fn rank_candidates<'w, I>(tokens: I, stop_words: &StopWords) -> Vec<(&'w str, usize)>
where
    I: IntoIterator<Item = &'w str>,
{
    let mut slots: FxHashMap<&'w str, usize> = FxHashMap::default();
    let mut ranked: Vec<(&'w str, usize)> = Vec::new();

    for word in tokens {
        if !is_candidate(word, stop_words) {
            continue;
        }
        match slots.get(word) {
            Some(&slot) => ranked[slot].1 += 1,
            None => {
                slots.insert(word, ranked.len());
                ranked.push((word, 1));
            }
        }
    }

    // Stable: ties stay in first-seen order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// The significant words of one document.
#[derive(Debug, Clone, Default)]
pub struct SignificantWords {
    words: FxHashSet<String>,
    candidates: usize,
}

impl SignificantWords {
    /// Selects the significant words from a document's tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use luhn_core::analyzer::StopWords;
    /// use luhn_core::summarizer::SignificantWords;
    ///
    /// let stop = StopWords::default();
    /// let tokens = ["the", "cat", "saw", "the", "cat", "nap"];
    /// let significant = SignificantWords::select(tokens, &stop);
    ///
    /// assert!(significant.contains("cat"));
    /// assert_eq!(significant.len(), 1);
    /// ```
    pub fn select<'w, I>(tokens: I, stop_words: &StopWords) -> Self
    where
        I: IntoIterator<Item = &'w str>,
    {
        let ranked = rank_candidates(tokens, stop_words);
        let keep = significant_count(ranked.len());
        let words = ranked
            .iter()
            .take(keep)
            .map(|&(word, _)| word.to_owned())
            .collect();

        Self {
            words,
            candidates: ranked.len(),
        }
    }

    /// Builds a set directly from words, bypassing frequency ranking.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: FxHashSet<String> = words.into_iter().map(Into::into).collect();
        let candidates = words.len();
        Self { words, candidates }
    }

    /// Checks whether a normalized word is significant.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of significant words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if no word is significant.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of distinct words that passed the filters.
    #[inline]
    pub fn candidates(&self) -> usize {
        self.candidates
    }

    /// Iterates over the significant words in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
