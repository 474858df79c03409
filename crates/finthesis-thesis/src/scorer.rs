//! Keyword-driven thesis structuring.

use std::collections::HashSet;

pub use finthesis_core::app_config::DEFAULT_TOP_N;
use finthesis_core::{CategoryGroup, CategoryGroupKind, CategoryTable, Document, StructuredThesis};
use serde::Serialize;

use crate::strategy::{OccurrenceCount, ScoringStrategy};

/// A category label with its hit count in a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub label: String,
    pub hits: usize,
}

/// Ranks a summary against a [`CategoryTable`] and keeps the top labels per
/// group.
///
/// Pure: the same summary and documents always yield the same thesis, and
/// the table is never modified.
#[derive(Debug, Clone)]
pub struct CategoryScorer<S = OccurrenceCount> {
    table: CategoryTable,
    strategy: S,
    top_n: usize,
}

impl CategoryScorer<OccurrenceCount> {
    #[must_use]
    pub fn new(table: CategoryTable, top_n: usize) -> Self {
        Self::with_strategy(table, OccurrenceCount, top_n)
    }
}

impl Default for CategoryScorer<OccurrenceCount> {
    fn default() -> Self {
        Self::new(CategoryTable::fintech(), DEFAULT_TOP_N)
    }
}

impl<S: ScoringStrategy> CategoryScorer<S> {
    #[must_use]
    pub fn with_strategy(table: CategoryTable, strategy: S, top_n: usize) -> Self {
        Self {
            table,
            strategy,
            top_n,
        }
    }

    #[must_use]
    pub fn table(&self) -> &CategoryTable {
        &self.table
    }

    #[must_use]
    pub fn top_n(&self) -> usize {
        self.top_n
    }

    #[must_use]
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Build the structured thesis for `summary`, carrying the source
    /// identifiers of `documents` through.
    ///
    /// Categories with zero hits never appear. An empty summary yields empty
    /// category lists.
    #[must_use]
    pub fn structure(&self, summary: &str, documents: &[Document]) -> StructuredThesis {
        let text_lower = summary.to_lowercase();
        let top_labels = |kind: CategoryGroupKind| -> Vec<String> {
            self.rank_lowercased(&text_lower, self.table.group(kind))
                .into_iter()
                .take(self.top_n)
                .map(|score| score.label)
                .collect()
        };

        let thesis = StructuredThesis {
            key_themes: top_labels(CategoryGroupKind::Themes),
            risks: top_labels(CategoryGroupKind::Risks),
            investment_signals: top_labels(CategoryGroupKind::Signals),
            sources: collect_sources(documents),
        };

        tracing::info!(
            strategy = self.strategy.name(),
            themes = thesis.key_themes.len(),
            risks = thesis.risks.len(),
            signals = thesis.investment_signals.len(),
            sources = thesis.sources.len(),
            "structured thesis from summary"
        );
        thesis
    }

    /// Every category in `kind` with at least one hit, best first. Equal hit
    /// counts keep table declaration order.
    #[must_use]
    pub fn rank(&self, summary: &str, kind: CategoryGroupKind) -> Vec<CategoryScore> {
        self.rank_lowercased(&summary.to_lowercase(), self.table.group(kind))
    }

    fn rank_lowercased(&self, text_lower: &str, group: &CategoryGroup) -> Vec<CategoryScore> {
        let mut scored: Vec<CategoryScore> = group
            .entries()
            .iter()
            .map(|entry| CategoryScore {
                label: entry.label.clone(),
                hits: self.strategy.score(text_lower, &entry.keywords),
            })
            .filter(|score| score.hits > 0)
            .collect();
        // Stable sort: ties stay in declaration order.
        scored.sort_by(|a, b| b.hits.cmp(&a.hits));

        tracing::debug!(
            group = %group.kind(),
            matched = scored.len(),
            "ranked category group"
        );
        scored
    }
}

/// Source identifiers of `documents`, deduplicated, in first-seen order.
/// Documents without a source are skipped.
#[must_use]
pub fn collect_sources(documents: &[Document]) -> Vec<String> {
    let mut seen = HashSet::new();
    documents
        .iter()
        .filter_map(Document::source_id)
        .filter(|id| seen.insert(*id))
        .map(str::to_string)
        .collect()
}

/// Structure `summary` against the built-in fintech table.
#[must_use]
pub fn structure(summary: &str, documents: &[Document], top_n: usize) -> StructuredThesis {
    CategoryScorer::new(CategoryTable::fintech(), top_n).structure(summary, documents)
}

#[cfg(test)]
#[path = "scorer_test.rs"]
mod tests;
