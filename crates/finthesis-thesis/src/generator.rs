//! Summarize-then-structure orchestration.

use finthesis_core::{Document, StructuredThesis};
use finthesis_summarizer::Summarizer;
use serde::Serialize;

use crate::error::ThesisError;
use crate::scorer::CategoryScorer;
use crate::strategy::{OccurrenceCount, ScoringStrategy};

/// Everything one thesis run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThesisReport {
    pub topic: String,
    /// Name of the summarizer that produced `summary`.
    pub summarizer: String,
    pub summary: String,
    pub thesis: StructuredThesis,
}

/// Runs a [`Summarizer`] over the documents, then structures the summary
/// with a [`CategoryScorer`].
pub struct ThesisGenerator<S = OccurrenceCount> {
    summarizer: Box<dyn Summarizer>,
    scorer: CategoryScorer<S>,
}

impl<S: ScoringStrategy> ThesisGenerator<S> {
    #[must_use]
    pub fn new(summarizer: Box<dyn Summarizer>, scorer: CategoryScorer<S>) -> Self {
        Self { summarizer, scorer }
    }

    #[must_use]
    pub fn summarizer(&self) -> &dyn Summarizer {
        self.summarizer.as_ref()
    }

    #[must_use]
    pub fn scorer(&self) -> &CategoryScorer<S> {
        &self.scorer
    }

    /// Summarize `documents` and structure the result for `topic`.
    ///
    /// An empty summary is not an error: the report comes back with empty
    /// category lists and the document sources.
    ///
    /// # Errors
    ///
    /// Returns [`ThesisError::Summarize`] if the summarizer fails.
    pub fn generate(&self, topic: &str, documents: &[Document]) -> Result<ThesisReport, ThesisError> {
        tracing::info!(
            topic,
            documents = documents.len(),
            summarizer = self.summarizer.name(),
            "generating thesis"
        );

        let summary = self.summarizer.summarize(documents)?;
        if summary.trim().is_empty() {
            tracing::warn!(topic, "summarizer returned an empty summary");
        }

        let thesis = self.scorer.structure(&summary, documents);
        Ok(ThesisReport {
            topic: topic.to_string(),
            summarizer: self.summarizer.name().to_string(),
            summary,
            thesis,
        })
    }
}

#[cfg(test)]
mod tests {
    use finthesis_summarizer::{
        ExternalSummary, ExtractError, ExtractorConfig, LocalExtractiveSummarizer,
    };

    use super::*;

    struct FailingSummarizer;

    impl Summarizer for FailingSummarizer {
        fn name(&self) -> &str {
            "failing"
        }

        fn summarize(&self, _documents: &[Document]) -> Result<String, ExtractError> {
            Err(ExtractError::InvalidOverlapThreshold(2.0))
        }
    }

    fn docs() -> Vec<Document> {
        vec![
            Document::new(
                "Neobanks are expanding digital banking services across emerging markets.",
            )
            .with_source("https://news.example/neobanks"),
            Document::new("Regulators opened an enforcement review of crypto lending platforms.")
                .with_source("https://news.example/crypto"),
        ]
    }

    #[test]
    fn local_pipeline_produces_report() {
        let summarizer = LocalExtractiveSummarizer::new(ExtractorConfig::default()).unwrap();
        let generator = ThesisGenerator::new(Box::new(summarizer), CategoryScorer::default());
        let report = generator.generate("neobanking", &docs()).unwrap();

        assert_eq!(report.topic, "neobanking");
        assert_eq!(report.summarizer, "local-extractor");
        assert!(report.summary.starts_with("Neobanks are expanding"));
        assert!(report.thesis.key_themes.contains(&"Neobanking".to_string()));
        assert_eq!(
            report.thesis.sources,
            vec!["https://news.example/neobanks", "https://news.example/crypto"]
        );
    }

    #[test]
    fn external_summary_is_structured_as_given() {
        let summary = "Embedded finance platforms face regulatory pressure.";
        let generator = ThesisGenerator::new(
            Box::new(ExternalSummary::new(summary)),
            CategoryScorer::default(),
        );
        let report = generator.generate("embedded finance", &docs()).unwrap();

        assert_eq!(report.summarizer, "external");
        assert_eq!(report.summary, summary);
        assert_eq!(report.thesis.risks[0], "Regulatory Risk");
    }

    #[test]
    fn empty_summary_yields_empty_categories_with_sources() {
        let generator =
            ThesisGenerator::new(Box::new(ExternalSummary::new("")), CategoryScorer::default());
        let report = generator.generate("anything", &docs()).unwrap();

        assert!(report.thesis.has_no_categories());
        assert_eq!(report.thesis.sources.len(), 2);
    }

    #[test]
    fn summarizer_failure_propagates() {
        let generator = ThesisGenerator::new(Box::new(FailingSummarizer), CategoryScorer::default());
        let err = generator.generate("topic", &docs()).unwrap_err();
        assert!(matches!(
            err,
            ThesisError::Summarize(ExtractError::InvalidOverlapThreshold(_))
        ));
    }

    #[test]
    fn report_serializes_nested_thesis() {
        let generator = ThesisGenerator::new(
            Box::new(ExternalSummary::new("Payments grew.")),
            CategoryScorer::default(),
        );
        let report = generator.generate("payments", &[]).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["topic"], "payments");
        assert_eq!(json["summarizer"], "external");
        assert_eq!(json["thesis"]["key_themes"][0], "Digital Payments");
        assert!(json["thesis"]["sources"].as_array().unwrap().is_empty());
    }
}
