use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Metadata keys checked, in order, when resolving a document's source
/// identifier.
pub const SOURCE_KEYS: &[&str] = &["source_url", "url", "source"];

/// A unit of ingested text plus its metadata (source URL, title, ...).
///
/// Produced by whatever ingestion layer sits in front of the pipeline. The
/// pipeline only reads [`Document::text`] and [`Document::source_id`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub text: String,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl Document {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metadata: BTreeMap::new(),
        }
    }

    /// Attach a metadata entry, replacing any previous value for `key`.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Shorthand for `with_metadata("source_url", url)`.
    #[must_use]
    pub fn with_source(self, url: impl Into<String>) -> Self {
        self.with_metadata("source_url", url)
    }

    /// The document's source identifier.
    ///
    /// Looks up `source_url`, then `url`, then `source`. Blank values are
    /// skipped. Returns `None` when no key carries a usable value.
    #[must_use]
    pub fn source_id(&self) -> Option<&str> {
        SOURCE_KEYS
            .iter()
            .filter_map(|key| self.metadata.get(*key))
            .map(|value| value.trim())
            .find(|value| !value.is_empty())
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.metadata.get("title").map(String::as_str)
    }

    /// `true` when the text has no non-whitespace content.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
