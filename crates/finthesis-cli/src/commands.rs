//! Command handlers for the CLI.
//!
//! Each handler builds its pipeline pieces from the resolved [`AppConfig`]
//! and prints to stdout.

use std::path::Path;

use anyhow::Context;
use finthesis_core::{AppConfig, CategoryEntry, CategoryGroupKind, CategoryTable};
use finthesis_summarizer::{
    ExternalSummary, ExtractorConfig, LocalExtractiveSummarizer, Summarizer,
};
use finthesis_thesis::{render_markdown, CategoryScorer, ThesisGenerator, ThesisReport};
use serde::Serialize;

use crate::input::{load_documents, read_text};
use crate::OutputFormat;

pub(crate) struct ThesisArgs<'a> {
    pub docs: &'a Path,
    pub topic: &'a str,
    pub summary_file: Option<&'a Path>,
    pub format: OutputFormat,
    pub clean: bool,
}

pub(crate) fn extractor_config(config: &AppConfig) -> ExtractorConfig {
    ExtractorConfig {
        max_sentences: config.max_sentences,
        overlap_threshold: config.overlap_threshold,
        min_words: config.min_sentence_words,
        ..ExtractorConfig::default()
    }
}

fn build_scorer(config: &AppConfig) -> anyhow::Result<CategoryScorer> {
    let table = config
        .category_table()
        .context("failed to load category table")?;
    Ok(CategoryScorer::new(table, config.top_n))
}

/// Print the local extractive summary of the documents at `docs`.
pub(crate) fn run_summarize(config: &AppConfig, docs: &Path, clean: bool) -> anyhow::Result<()> {
    let documents = load_documents(docs, clean)?;
    let summarizer = LocalExtractiveSummarizer::new(extractor_config(config))?;
    let summary = summarizer.summarize(&documents)?;
    if summary.is_empty() {
        tracing::warn!("no qualifying sentences; summary is empty");
    }
    println!("{summary}");
    Ok(())
}

/// Structure `summary` and print the thesis as pretty JSON.
pub(crate) fn run_structure(
    config: &AppConfig,
    summary: &str,
    docs: Option<&Path>,
) -> anyhow::Result<()> {
    let documents = match docs {
        Some(path) => load_documents(path, false)?,
        None => Vec::new(),
    };
    let thesis = build_scorer(config)?.structure(summary, &documents);
    println!("{}", serde_json::to_string_pretty(&thesis)?);
    Ok(())
}

/// Run the full summarize-and-structure pipeline.
///
/// With `summary_file`, that text stands in for the local summary.
pub(crate) fn run_thesis(config: &AppConfig, args: &ThesisArgs<'_>) -> anyhow::Result<()> {
    let documents = load_documents(args.docs, args.clean)?;
    let summarizer: Box<dyn Summarizer> = match args.summary_file {
        Some(path) => Box::new(ExternalSummary::new(read_text(path)?.trim())),
        None => Box::new(LocalExtractiveSummarizer::new(extractor_config(config))?),
    };
    let generator = ThesisGenerator::new(summarizer, build_scorer(config)?);
    let report = generator.generate(args.topic, &documents)?;
    println!("{}", format_report(&report, args.format)?);
    Ok(())
}

pub(crate) fn format_report(report: &ThesisReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Markdown => Ok(render_markdown(report)),
    }
}

#[derive(Debug, Serialize)]
struct GroupListing<'a> {
    group: CategoryGroupKind,
    entries: &'a [CategoryEntry],
}

/// Print the active category table as JSON, optionally a single group.
pub(crate) fn run_categories(
    config: &AppConfig,
    group: Option<CategoryGroupKind>,
) -> anyhow::Result<()> {
    let table = config
        .category_table()
        .context("failed to load category table")?;
    println!("{}", list_categories(&table, group)?);
    Ok(())
}

pub(crate) fn list_categories(
    table: &CategoryTable,
    group: Option<CategoryGroupKind>,
) -> anyhow::Result<String> {
    let kinds: Vec<CategoryGroupKind> = match group {
        Some(kind) => vec![kind],
        None => CategoryGroupKind::ALL.to_vec(),
    };
    let listing: Vec<GroupListing<'_>> = kinds
        .into_iter()
        .map(|kind| GroupListing {
            group: kind,
            entries: table.group(kind).entries(),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&listing)?)
}
