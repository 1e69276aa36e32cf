//! Luhn summarization engine.
//!
//! Scores every sentence by its densest cluster of significant words and
//! keeps the best ones in document order.
//!
//! Pipeline per call:
//! 1. Strip markup; blank documents summarize to `""`
//! 2. Split sentences; short documents are returned whole
//! 3. Select significant words over the whole document
//! 4. Score each sentence with [`cluster::score_positions`]
//! 5. Take the top N by score (stable), restore document order, join with spaces
//!
//! Threading:
//! - [`Summarizer`] is `Send + Sync`. It keeps no per-call buffers, so a
//!   shared reference can summarize on many threads at once.

mod api;
pub mod cluster;
pub mod significance;
mod stats;
mod types;

pub use cluster::{ClusterScorer, MAX_GAP};
pub use significance::SignificantWords;
pub use stats::DocumentStats;
pub use types::Summarizer;

#[cfg(test)]
mod tests {
    use super::*;
    use luhn_types::{Language, SummarizerConfig, SummaryError};

    const PETS: &str = "The cat sat on the mat. A dog ran in the park today. \
                        The cat and the dog played together happily in the sunny park.";

    const RUST: &str = "Rust compiles fast code. Weather was mild today. \
                        Rust borrow checker keeps rust code safe. Lunch was pasta.";

    #[test]
    fn picks_densest_sentence() {
        let summarizer = Summarizer::new(Language::English);
        assert_eq!(
            summarizer.summarize(RUST, 1).expect("valid count"),
            "Rust borrow checker keeps rust code safe."
        );
    }

    #[test]
    fn restores_document_order() {
        let summarizer = Summarizer::new(Language::English);
        assert_eq!(
            summarizer.summarize(RUST, 2).expect("valid count"),
            "Rust compiles fast code. Rust borrow checker keeps rust code safe."
        );
    }

    #[test]
    fn ties_keep_document_order() {
        // "cat" and "dog" are significant; every sentence scores 1.0.
        let summarizer = Summarizer::default();
        assert_eq!(
            summarizer.summarize(PETS, 2).expect("valid count"),
            "The cat sat on the mat. A dog ran in the park today."
        );
    }

    #[test]
    fn short_document_returned_whole() {
        let summarizer = Summarizer::default();
        let text = "<p>First point here.</p> <p>Second point.</p>";
        assert_eq!(
            summarizer.summarize(text, 3).expect("valid count"),
            "First point here. Second point."
        );
        assert_eq!(
            summarizer.summarize(text, 2).expect("valid count"),
            "First point here. Second point."
        );
    }

    #[test]
    fn short_document_keeps_inner_whitespace() {
        let summarizer = Summarizer::default();
        let text = "  One.\n\nTwo.  ";
        assert_eq!(summarizer.summarize(text, 5).expect("valid count"), "One.\n\nTwo.");
    }

    #[test]
    fn blank_document_gives_empty_summary() {
        let summarizer = Summarizer::default();
        assert_eq!(summarizer.summarize("", 3).expect("valid count"), "");
        assert_eq!(summarizer.summarize("  \n\t ", 3).expect("valid count"), "");
        assert_eq!(summarizer.summarize("<p> </p><br/>", 3).expect("valid count"), "");
    }

    #[test]
    fn zero_sentence_count_rejected() {
        let summarizer = Summarizer::default();
        assert_eq!(
            summarizer.summarize(PETS, 0),
            Err(SummaryError::InvalidSentenceCount { count: 0 })
        );
        assert!(summarizer.summarize("", 0).is_err());
    }

    #[test]
    fn no_significant_words_selects_leading_sentences() {
        let summarizer = Summarizer::default();
        let text = "It is. So it is. Or is it? It is!";
        assert_eq!(summarizer.summarize(text, 2).expect("valid count"), "It is. So it is.");
    }

    #[test]
    fn language_changes_significant_words() {
        let text = "Which which which. Cats nap. Dogs run.";
        let en = Summarizer::new(Language::English);
        let ru = Summarizer::new(Language::Russian);
        assert_eq!(en.summarize(text, 1).expect("valid count"), "Cats nap.");
        assert_eq!(ru.summarize(text, 1).expect("valid count"), "Which which which.");
    }

    #[test]
    fn russian_document() {
        // "кошка" and "диване" are significant; only the third sentence packs them.
        let text = "Кошка долго спит одна на старом диване. Погода была тёплой. \
                    Кошка на диване. Обед был очень вкусным.";
        let summarizer = Summarizer::new(Language::Russian);
        let summary = summarizer.summarize(text, 1).expect("valid count");
        assert_eq!(summary, "Кошка на диване.");
    }

    #[test]
    fn summarize_default_uses_config() {
        let summarizer = Summarizer::with_config(SummarizerConfig::new(Language::English, 1));
        assert_eq!(
            summarizer.summarize_default(RUST).expect("valid count"),
            "Rust borrow checker keeps rust code safe."
        );

        let broken = Summarizer::with_config(SummarizerConfig::new(Language::English, 0));
        assert!(broken.summarize_default(RUST).is_err());
    }

    #[test]
    fn rank_scores_in_document_order() {
        let summarizer = Summarizer::default();
        let ranked = summarizer.rank(RUST);
        let scores: Vec<f64> = ranked.iter().map(|s| s.score).collect();
        let indexes: Vec<usize> = ranked.iter().map(|s| s.index).collect();
        assert_eq!(indexes, vec![0, 1, 2, 3]);
        assert_eq!(scores, vec![1.0, 0.0, 1.5, 0.0]);
        assert!(summarizer.rank("   ").is_empty());
    }

    #[test]
    fn stats_snapshot() {
        let summarizer = Summarizer::default();
        let stats = summarizer.stats(PETS);
        assert_eq!(
            stats,
            DocumentStats {
                sentences: 3,
                words: 25,
                candidates: 11,
                significant: 2,
            }
        );
        assert_eq!(
            stats.to_string(),
            "3 sentences, 25 words, 11 candidate words, 2 significant"
        );
        assert_eq!(summarizer.stats(""), DocumentStats::default());
    }

    #[test]
    fn summarizer_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Summarizer>();

        let summarizer = Summarizer::default();
        let expected = summarizer.summarize(RUST, 2).expect("valid count");

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| summarizer.summarize(RUST, 2)))
                .collect();
            for handle in handles {
                let summary = handle.join().expect("thread panicked");
                assert_eq!(summary.as_deref(), Ok(expected.as_str()));
            }
        });
    }

    #[test]
    fn accessors() {
        let summarizer = Summarizer::new(Language::Russian);
        assert_eq!(summarizer.language(), Language::Russian);
        assert_eq!(summarizer.config().sentence_count, 3);
        assert!(summarizer.stop_words().contains("и"));
    }
}
