//! Extractive summarization: split, score, select, deduplicate, reassemble.

use std::collections::HashSet;

pub use finthesis_core::app_config::{
    DEFAULT_MAX_SENTENCES, DEFAULT_MIN_SENTENCE_WORDS, DEFAULT_OVERLAP_THRESHOLD,
};
use finthesis_core::Document;
use serde::Serialize;

use crate::clean::is_promotional;
use crate::error::ExtractError;
use crate::lexicon::{tokenize, Lexicon};
use crate::sentence::{has_scrape_artifact, has_terminal_punctuation, split_sentences, word_count};

/// Tuning knobs for [`SentenceExtractor`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractorConfig {
    /// Upper bound on sentences in the summary.
    pub max_sentences: usize,
    /// A candidate whose word-overlap ratio with an accepted sentence is
    /// strictly greater than this is dropped. Must be within `[0, 1]`.
    pub overlap_threshold: f64,
    /// Sentences with fewer whitespace-separated words are discarded.
    pub min_words: usize,
    /// Discard sentences containing ad/promo phrases.
    pub drop_promotional: bool,
    /// Discard sentences with `word.Word` gluing from lossy scrapes.
    pub drop_scrape_artifacts: bool,
    /// Discard fragments that do not end in `.`, `!`, or `?`.
    pub require_terminal_punctuation: bool,
    /// Discard mid-sentence fragments that start with a lowercase letter,
    /// unless every qualifying sentence is such a fragment.
    pub drop_lowercase_fragments: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_sentences: DEFAULT_MAX_SENTENCES,
            overlap_threshold: DEFAULT_OVERLAP_THRESHOLD,
            min_words: DEFAULT_MIN_SENTENCE_WORDS,
            drop_promotional: true,
            drop_scrape_artifacts: true,
            require_terminal_punctuation: false,
            drop_lowercase_fragments: true,
        }
    }
}

impl ExtractorConfig {
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidOverlapThreshold`] when the threshold
    /// is NaN or outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), ExtractError> {
        if (0.0..=1.0).contains(&self.overlap_threshold) {
            Ok(())
        } else {
            Err(ExtractError::InvalidOverlapThreshold(self.overlap_threshold))
        }
    }
}

/// A candidate sentence. `original_index` is its position across all
/// documents in reading order; `document_index` is the document it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    pub text: String,
    pub original_index: usize,
    pub document_index: usize,
    pub score: usize,
}

/// Local, deterministic extractive summarizer.
#[derive(Debug, Clone)]
pub struct SentenceExtractor {
    config: ExtractorConfig,
    lexicon: Lexicon,
}

impl SentenceExtractor {
    /// Extractor over the built-in fintech lexicon.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError`] if `config` is invalid.
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractError> {
        Self::with_lexicon(config, Lexicon::fintech())
    }

    /// # Errors
    ///
    /// Returns [`ExtractError`] if `config` is invalid.
    pub fn with_lexicon(config: ExtractorConfig, lexicon: Lexicon) -> Result<Self, ExtractError> {
        config.validate()?;
        Ok(Self { config, lexicon })
    }

    #[must_use]
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Split every document into qualifying, scored sentences in reading order.
    ///
    /// Blank documents are skipped. Indices count only qualifying sentences.
    /// Lowercase fragments are dropped only when at least one complete
    /// sentence remains.
    #[must_use]
    pub fn candidates(&self, documents: &[Document]) -> Vec<Sentence> {
        let mut raw: Vec<(usize, &str)> = Vec::new();
        for (document_index, document) in documents.iter().enumerate() {
            if document.is_blank() {
                tracing::debug!(document_index, "skipping blank document");
                continue;
            }
            raw.extend(
                split_sentences(&document.text)
                    .into_iter()
                    .filter(|s| self.qualifies(s))
                    .map(|s| (document_index, s)),
            );
        }

        if self.config.drop_lowercase_fragments && raw.iter().any(|&(_, s)| !is_fragment(s)) {
            let before = raw.len();
            raw.retain(|&(_, s)| !is_fragment(s));
            tracing::debug!(dropped = before - raw.len(), "dropped lowercase fragments");
        }

        raw.into_iter()
            .enumerate()
            .map(|(original_index, (document_index, text))| Sentence {
                text: text.to_string(),
                original_index,
                document_index,
                score: self.lexicon.score(text),
            })
            .collect()
    }

    /// Pick the summary sentences, returned in reading order.
    ///
    /// Candidates are ranked by score (ties: earlier first). Walking that
    /// ranking, a candidate too similar to an already accepted sentence is
    /// skipped without using a slot, until `max_sentences` are accepted or
    /// candidates run out.
    #[must_use]
    pub fn select(&self, documents: &[Document]) -> Vec<Sentence> {
        let mut ranked = self.candidates(documents);
        let candidate_count = ranked.len();
        // Stable sort keeps reading order among equal scores.
        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        let mut accepted: Vec<(Sentence, HashSet<String>)> = Vec::new();
        let mut duplicates = 0_usize;
        for sentence in ranked {
            if accepted.len() >= self.config.max_sentences {
                break;
            }
            let words = word_set(&sentence.text);
            let is_duplicate = accepted.iter().any(|(_, existing)| {
                set_overlap_ratio(&words, existing) > self.config.overlap_threshold
            });
            if is_duplicate {
                duplicates += 1;
                tracing::debug!(
                    original_index = sentence.original_index,
                    score = sentence.score,
                    "dropping near-duplicate sentence"
                );
                continue;
            }
            accepted.push((sentence, words));
        }

        let mut selected: Vec<Sentence> = accepted.into_iter().map(|(s, _)| s).collect();
        selected.sort_by_key(|s| s.original_index);

        tracing::debug!(
            candidates = candidate_count,
            duplicates,
            selected = selected.len(),
            "sentence selection complete"
        );
        selected
    }

    /// Extractive summary: selected sentences joined by single spaces.
    ///
    /// Returns an empty string when nothing qualifies.
    #[must_use]
    pub fn extract(&self, documents: &[Document]) -> String {
        let selected = self.select(documents);
        let summary = selected
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        tracing::info!(
            documents = documents.len(),
            sentences = selected.len(),
            chars = summary.len(),
            "local extraction complete"
        );
        summary
    }

    fn qualifies(&self, sentence: &str) -> bool {
        if word_count(sentence) < self.config.min_words {
            return false;
        }
        if self.config.require_terminal_punctuation && !has_terminal_punctuation(sentence) {
            return false;
        }
        if self.config.drop_promotional && is_promotional(sentence) {
            return false;
        }
        if self.config.drop_scrape_artifacts && has_scrape_artifact(sentence) {
            return false;
        }
        true
    }
}

/// Summarize `documents` with the built-in lexicon and default filters.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidOverlapThreshold`] when
/// `overlap_threshold` is NaN or outside `[0, 1]`.
pub fn extract(
    documents: &[Document],
    max_sentences: usize,
    overlap_threshold: f64,
) -> Result<String, ExtractError> {
    let extractor = SentenceExtractor::new(ExtractorConfig {
        max_sentences,
        overlap_threshold,
        ..ExtractorConfig::default()
    })?;
    Ok(extractor.extract(documents))
}

/// A sentence that starts with a lowercase letter, e.g. a chunk cut out of
/// the middle of a scraped paragraph.
fn is_fragment(sentence: &str) -> bool {
    sentence.chars().next().is_some_and(char::is_lowercase)
}

/// Shared unique words divided by the smaller sentence's unique word count.
///
/// Returns `0.0` when either sentence has no words.
#[must_use]
pub fn overlap_ratio(a: &str, b: &str) -> f64 {
    set_overlap_ratio(&word_set(a), &word_set(b))
}

fn word_set(text: &str) -> HashSet<String> {
    tokenize(text).into_iter().collect()
}

#[allow(clippy::cast_precision_loss)]
fn set_overlap_ratio(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let smaller = a.len().min(b.len());
    if smaller == 0 {
        return 0.0;
    }
    let shared = a.intersection(b).count();
    shared as f64 / smaller as f64
}

#[cfg(test)]
#[path = "extractor_test.rs"]
mod tests;
