//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Markup**: Strips tags, comments and script/style blocks from raw content
//! - **Sentence**: Splits markup-free text into sentences
//! - **Normalizer**: Reduces text to lowercase letters, numbers and single spaces
//! - **Tokenizer**: Splits normalized text into positional word tokens
//! - **Stopwords**: Per-language function words excluded from scoring

pub mod markup;
pub mod normalizer;
pub mod sentence;
pub mod stopwords;
pub mod tokenizer;

pub use markup::{is_blank, strip_markup, strip_markup_into};
pub use normalizer::TextNormalizer;
pub use sentence::{sentences, split_sentences};
pub use stopwords::StopWords;
pub use tokenizer::{tokenize_words, Tokenizer};
