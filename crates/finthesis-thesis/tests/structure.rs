//! End-to-end checks: documents through extraction and structuring.

use finthesis_core::{CategoryEntry, CategoryTable, Document, StructuredThesis};
use finthesis_summarizer::{extract, ExtractorConfig, LocalExtractiveSummarizer};
use finthesis_thesis::{render_markdown, structure, CategoryScorer, ThesisGenerator};

fn scenario_entries() -> Vec<CategoryEntry> {
    vec![
        CategoryEntry::new("Embedded Finance", ["embedded", "finance"]),
        CategoryEntry::new("Regulatory", ["regulatory"]),
        CategoryEntry::new("Payments", ["payments"]),
    ]
}

#[test]
fn ranks_by_hit_count_within_one_group() {
    let table = CategoryTable::new(scenario_entries(), vec![], vec![]).unwrap();
    let thesis = CategoryScorer::new(table, 3)
        .structure("Embedded finance and regulatory risk in payments", &[]);

    assert_eq!(thesis.key_themes, vec!["Embedded Finance", "Regulatory", "Payments"]);
    assert!(thesis.risks.is_empty());
    assert!(thesis.investment_signals.is_empty());
}

#[test]
fn each_group_ranks_independently() {
    let mut entries = scenario_entries().into_iter();
    let table = CategoryTable::new(
        entries.next().into_iter().collect(),
        entries.next().into_iter().collect(),
        entries.collect(),
    )
    .unwrap();
    let thesis = CategoryScorer::new(table, 3)
        .structure("Embedded finance and regulatory risk in payments", &[]);

    assert_eq!(thesis.key_themes, vec!["Embedded Finance"]);
    assert_eq!(thesis.risks, vec!["Regulatory"]);
    assert_eq!(thesis.investment_signals, vec!["Payments"]);
}

#[test]
fn near_duplicate_keeps_higher_scored_sentence() {
    let docs = vec![
        Document::new("The startup raised new funding for its office furniture business."),
        Document::new("The startup raised new funding for its crypto payments lending business."),
    ];
    let summary = extract(&docs, 7, 0.7).unwrap();
    assert_eq!(
        summary,
        "The startup raised new funding for its crypto payments lending business."
    );
}

#[test]
fn empty_input_gives_empty_thesis() {
    assert_eq!(structure("", &[], 3), StructuredThesis::default());
}

#[test]
fn full_pipeline_renders_report() {
    let docs = vec![
        Document::new(
            "Banking as a service providers are signing new fintech platforms every quarter. \
             Analysts warn that regulatory scrutiny of BaaS sponsor banks is rising.",
        )
        .with_source("https://news.example/baas"),
        Document::new("Embedded finance lets software companies offer lending and payments.")
            .with_source("https://news.example/embedded"),
    ];
    let summarizer = LocalExtractiveSummarizer::new(ExtractorConfig::default()).unwrap();
    let generator = ThesisGenerator::new(Box::new(summarizer), CategoryScorer::default());
    let report = generator.generate("embedded finance", &docs).unwrap();

    assert!(report.thesis.key_themes.contains(&"Embedded Finance".to_string()));
    assert_eq!(report.thesis.risks[0], "Regulatory Risk");
    assert_eq!(report.thesis.sources.len(), 2);

    let md = render_markdown(&report);
    assert!(md.contains("- Embedded Finance\n"));
    assert!(md.contains("- https://news.example/embedded\n"));
}
