use std::path::PathBuf;

use crate::categories::{load_category_table, CategoryTable};
use crate::ConfigError;

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_MAX_SENTENCES: usize = 7;
pub const DEFAULT_OVERLAP_THRESHOLD: f64 = 0.7;
pub const DEFAULT_MIN_SENTENCE_WORDS: usize = 4;
pub const DEFAULT_TOP_N: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log_level: String,
    /// YAML category table. `None` selects the built-in fintech table.
    pub categories_path: Option<PathBuf>,
    pub max_sentences: usize,
    /// Word-overlap ratio above which a sentence counts as a near-duplicate.
    /// Always within `[0, 1]`.
    pub overlap_threshold: f64,
    pub min_sentence_words: usize,
    pub top_n: usize,
}

impl AppConfig {
    /// Resolve the category table this configuration points at.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a configured table file cannot be loaded.
    pub fn category_table(&self) -> Result<CategoryTable, ConfigError> {
        match &self.categories_path {
            Some(path) => load_category_table(path),
            None => Ok(CategoryTable::fintech()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            categories_path: None,
            max_sentences: DEFAULT_MAX_SENTENCES,
            overlap_threshold: DEFAULT_OVERLAP_THRESHOLD,
            min_sentence_words: DEFAULT_MIN_SENTENCE_WORDS,
            top_n: DEFAULT_TOP_N,
        }
    }
}
