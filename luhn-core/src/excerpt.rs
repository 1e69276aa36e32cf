//! Excerpt generation for content drafts.
//!
//! Two entry points wrap the summarizer for a publishing host:
//! - [`ExcerptGenerator::on_save`] fills a missing excerpt while a draft is
//!   being saved, if the policy allows it
//! - [`ExcerptGenerator::generate`] summarizes content on demand (editor button)

use luhn_types::{SummaryError, DEFAULT_SENTENCE_COUNT};
use tracing::debug;

use crate::settings::Settings;
use crate::summarizer::Summarizer;

/// Content kinds that receive automatic excerpts by default.
pub const DEFAULT_KINDS: [&str; 2] = ["post", "page"];

/// Statuses a draft may have and still receive an automatic excerpt.
pub const DEFAULT_STATUSES: [&str; 4] = ["new", "auto-draft", "draft", "pending"];

/// When and how excerpts are generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcerptPolicy {
    pub allowed_kinds: Vec<String>,
    pub allowed_statuses: Vec<String>,
    pub auto_generate: bool,
    pub sentence_count: usize,
}

impl Default for ExcerptPolicy {
    fn default() -> Self {
        Self {
            allowed_kinds: DEFAULT_KINDS.iter().map(|s| (*s).to_owned()).collect(),
            allowed_statuses: DEFAULT_STATUSES.iter().map(|s| (*s).to_owned()).collect(),
            auto_generate: true,
            sentence_count: DEFAULT_SENTENCE_COUNT,
        }
    }
}

impl From<&Settings> for ExcerptPolicy {
    fn from(settings: &Settings) -> Self {
        Self {
            auto_generate: settings.auto_generate,
            sentence_count: settings.sentence_count,
            ..Self::default()
        }
    }
}

impl ExcerptPolicy {
    fn allows_kind(&self, kind: &str) -> bool {
        self.allowed_kinds.iter().any(|k| k == kind)
    }

    fn allows_status(&self, status: Option<&str>) -> bool {
        // A draft without a stored status has never been saved.
        status.is_none_or(|s| self.allowed_statuses.iter().any(|a| a == s))
    }
}

/// A piece of content as it is about to be stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub kind: String,
    /// Stored status, `None` for content that has never been saved.
    pub status: Option<String>,
    pub excerpt: String,
    pub content: String,
}

impl Draft {
    pub fn new(kind: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }
}

/// Applies an [`ExcerptPolicy`] with one shared summarizer.
#[derive(Debug, Clone)]
pub struct ExcerptGenerator {
    summarizer: Summarizer,
    policy: ExcerptPolicy,
}

impl ExcerptGenerator {
    pub fn new(summarizer: Summarizer, policy: ExcerptPolicy) -> Self {
        Self { summarizer, policy }
    }

    /// Builds a generator whose summarizer uses the stored language.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            Summarizer::with_config(settings.summarizer_config()),
            ExcerptPolicy::from(settings),
        )
    }

    pub fn policy(&self) -> &ExcerptPolicy {
        &self.policy
    }

    pub fn summarizer(&self) -> &Summarizer {
        &self.summarizer
    }

    /// Returns `true` if saving `draft` should fill its excerpt.
    pub fn should_generate(&self, draft: &Draft) -> bool {
        if !self.policy.allows_kind(&draft.kind) {
            debug!(kind = %draft.kind, "excerpt skipped: kind not allowed");
            return false;
        }
        if !self.policy.allows_status(draft.status.as_deref()) {
            debug!(status = ?draft.status, "excerpt skipped: status not allowed");
            return false;
        }
        if !self.policy.auto_generate {
            debug!("excerpt skipped: auto generation disabled");
            return false;
        }
        if !draft.excerpt.is_empty() {
            debug!("excerpt skipped: draft already has one");
            return false;
        }
        if draft.content.is_empty() {
            debug!("excerpt skipped: draft has no content");
            return false;
        }
        true
    }

    /// Fills the excerpt of `draft` when the policy allows it.
    ///
    /// Returns whether the excerpt was written. A draft that does not
    /// qualify is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidSentenceCount` if the policy asks for
    /// zero sentences.
    pub fn on_save(&self, draft: &mut Draft) -> Result<bool, SummaryError> {
        if !self.should_generate(draft) {
            return Ok(false);
        }

        draft.excerpt = self
            .summarizer
            .summarize(&draft.content, self.policy.sentence_count)?;
        debug!(kind = %draft.kind, len = draft.excerpt.len(), "excerpt generated");
        Ok(true)
    }

    /// Summarizes `content` on request.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::EmptyContent` if `content` is empty, or
    /// `SummaryError::InvalidSentenceCount` if the policy asks for zero
    /// sentences.
    pub fn generate(&self, content: &str) -> Result<String, SummaryError> {
        if content.is_empty() {
            return Err(SummaryError::EmptyContent);
        }
        self.summarizer.summarize(content, self.policy.sentence_count)
    }
}

impl Default for ExcerptGenerator {
    fn default() -> Self {
        Self::new(Summarizer::default(), ExcerptPolicy::default())
    }
}
