//! Cluster scoring.
//!
//! Luhn's measure rewards sentences where significant words sit close
//! together. Significant positions within `MAX_GAP` of each other form a
//! cluster; a cluster of `k` significant words spanning `w` positions scores
//! `k² / w`, and a sentence scores its best cluster.

use smallvec::SmallVec;

use crate::analyzer::{TextNormalizer, Tokenizer};
use crate::summarizer::significance::SignificantWords;

/// Largest position difference that keeps two significant words in one
/// cluster (at most four other words between them).
pub const MAX_GAP: u32 = 5;

/// A run of significant positions within one sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cluster {
    /// Position of the first significant word.
    pub first: u32,
    /// Position of the last significant word.
    pub last: u32,
    /// Number of significant words in the run.
    pub significant: u32,
}

impl Cluster {
    #[inline(always)]
    const fn starting_at(pos: u32) -> Self {
        Self {
            first: pos,
            last: pos,
            significant: 1,
        }
    }

    /// Span width including the non-significant words inside the cluster.
    #[inline(always)]
    pub const fn width(&self) -> u32 {
        self.last - self.first + 1
    }

    /// Luhn score `k² / w`.
    #[inline(always)]
    pub fn score(&self) -> f64 {
        let k = f64::from(self.significant);
        k * k / f64::from(self.width())
    }
}

/// Partitions ascending significant positions into clusters.
pub fn clusters(positions: &[u32]) -> SmallVec<[Cluster; 4]> {
    let mut out = SmallVec::new();
    let Some((&head, rest)) = positions.split_first() else {
        return out;
    };

    let mut current = Cluster::starting_at(head);
    for &pos in rest {
        debug_assert!(pos > current.last, "cluster: positions must be ascending");
        if pos - current.last <= MAX_GAP {
            current.last = pos;
            current.significant += 1;
        } else {
            out.push(current);
            current = Cluster::starting_at(pos);
        }
    }
    out.push(current);
    out
}

/// Scores ascending significant positions: the best cluster score, or 0.0.
///
/// # Examples
///
/// ```
/// use luhn_core::summarizer::cluster::score_positions;
///
/// assert_eq!(score_positions(&[0, 1, 2]), 3.0);
/// assert_eq!(score_positions(&[0, 6]), 1.0);
/// assert_eq!(score_positions(&[]), 0.0);
/// ```
pub fn score_positions(positions: &[u32]) -> f64 {
    clusters(positions)
        .iter()
        .map(Cluster::score)
        .fold(0.0, f64::max)
}

/// Scores sentences against a document's significant words.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClusterScorer {
    normalizer: TextNormalizer,
    tokenizer: Tokenizer,
}

impl ClusterScorer {
    /// Creates a new scorer.
    pub const fn new() -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            tokenizer: Tokenizer::new(),
        }
    }

    /// Scores already-normalized sentence text.
    pub fn score_normalized(&self, normalized: &str, significant: &SignificantWords) -> f64 {
        if significant.is_empty() {
            return 0.0;
        }

        let mut positions: SmallVec<[u32; 32]> = SmallVec::new();
        self.tokenizer.tokenize(normalized, |word, pos| {
            if significant.contains(word) {
                positions.push(pos);
            }
        });

        score_positions(&positions)
    }

    /// Normalizes a raw sentence into `buf` and scores it.
    pub fn score_sentence_with(
        &self,
        sentence: &str,
        significant: &SignificantWords,
        buf: &mut String,
    ) -> f64 {
        self.normalizer.normalize_into(sentence, buf);
        self.score_normalized(buf, significant)
    }

    /// Normalizes and scores a raw sentence.
    pub fn score_sentence(&self, sentence: &str, significant: &SignificantWords) -> f64 {
        let mut buf = String::with_capacity(sentence.len());
        self.score_sentence_with(sentence, significant, &mut buf)
    }
}
