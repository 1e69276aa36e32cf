//! Luhn extractive summarization.
//!
//! Picks the sentences of a document whose significant words sit closest
//! together and returns them in their original order.
//!
//! ## Modules
//!
//! - [`analyzer`]: markup stripping, sentence splitting, word normalization,
//!   tokenization and stop-word tables
//! - [`summarizer`]: significant-word selection, cluster scoring and the
//!   [`Summarizer`] itself
//! - [`settings`]: stored settings loaded from file and environment
//! - [`excerpt`]: automatic and on-demand excerpts for content drafts
//!
//! ## Example
//!
//! ```
//! use luhn_core::{Language, Summarizer};
//!
//! let summarizer = Summarizer::new(Language::English);
//! let text = "Rust compiles fast code. Weather was mild today. \
//!             Rust borrow checker keeps rust code safe. Lunch was pasta.";
//!
//! let summary = summarizer.summarize(text, 1)?;
//! assert_eq!(summary, "Rust borrow checker keeps rust code safe.");
//! # Ok::<(), luhn_core::SummaryError>(())
//! ```

pub mod analyzer;
pub mod excerpt;
pub mod settings;
pub mod summarizer;

pub use luhn_types::{Language, ScoredSentence, SummarizerConfig, SummaryError};
pub use summarizer::{DocumentStats, Summarizer};
