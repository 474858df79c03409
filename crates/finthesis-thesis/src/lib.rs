//! Keyword-driven investment thesis structuring.
//!
//! A [`CategoryScorer`] ranks summary text against the themes, risks, and
//! signals of a [`finthesis_core::CategoryTable`]. A [`ThesisGenerator`]
//! wires a summarizer in front of it.

pub mod error;
pub mod generator;
pub mod report;
pub mod scorer;
pub mod strategy;

pub use error::ThesisError;
pub use generator::{ThesisGenerator, ThesisReport};
pub use report::render_markdown;
pub use scorer::{collect_sources, structure, CategoryScore, CategoryScorer, DEFAULT_TOP_N};
pub use strategy::{count_occurrences, DistinctKeywordCount, OccurrenceCount, ScoringStrategy};
