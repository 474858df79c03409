//! The summarize capability and its implementations.

use finthesis_core::Document;

use crate::error::ExtractError;
use crate::extractor::{ExtractorConfig, SentenceExtractor};

/// Turns a set of documents into summary text.
pub trait Summarizer: Send + Sync {
    /// Short identifier reported alongside generated theses.
    fn name(&self) -> &str;

    /// # Errors
    ///
    /// Implementation-specific; the local extractor never fails once built.
    fn summarize(&self, documents: &[Document]) -> Result<String, ExtractError>;
}

/// Keyword-scored extractive summarizer. No model, no network.
#[derive(Debug, Clone)]
pub struct LocalExtractiveSummarizer {
    extractor: SentenceExtractor,
}

impl LocalExtractiveSummarizer {
    pub const NAME: &'static str = "local-extractor";

    /// # Errors
    ///
    /// Returns [`ExtractError`] if `config` is invalid.
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractError> {
        Ok(Self {
            extractor: SentenceExtractor::new(config)?,
        })
    }

    #[must_use]
    pub fn from_extractor(extractor: SentenceExtractor) -> Self {
        Self { extractor }
    }

    #[must_use]
    pub fn extractor(&self) -> &SentenceExtractor {
        &self.extractor
    }
}

impl Summarizer for LocalExtractiveSummarizer {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn summarize(&self, documents: &[Document]) -> Result<String, ExtractError> {
        tracing::info!(
            documents = documents.len(),
            "summarizing locally (keyword-based extraction)"
        );
        Ok(self.extractor.extract(documents))
    }
}

/// Summary text produced outside this crate, e.g. by a hosted LLM, handed in
/// as-is so the rest of the pipeline can treat both paths uniformly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalSummary {
    text: String,
}

impl ExternalSummary {
    pub const NAME: &'static str = "external";

    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Summarizer for ExternalSummary {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn summarize(&self, documents: &[Document]) -> Result<String, ExtractError> {
        tracing::debug!(
            documents = documents.len(),
            chars = self.text.len(),
            "using externally supplied summary"
        );
        Ok(self.text.clone())
    }
}
