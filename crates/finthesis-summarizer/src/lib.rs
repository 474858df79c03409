//! Local extractive summarization for FinThesis.
//!
//! Splits documents into sentences, scores them against a fintech salience
//! lexicon, drops near-duplicates, and stitches the winners back together in
//! reading order. Deterministic and model-free.

pub mod clean;
pub mod error;
pub mod extractor;
pub mod lexicon;
pub mod sentence;
pub mod summarizer;

pub use clean::clean_article_text;
pub use error::ExtractError;
pub use extractor::{extract, overlap_ratio, ExtractorConfig, Sentence, SentenceExtractor};
pub use lexicon::{tokenize, Lexicon};
pub use sentence::split_sentences;
pub use summarizer::{ExternalSummary, LocalExtractiveSummarizer, Summarizer};
