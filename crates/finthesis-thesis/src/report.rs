//! Human-readable rendering of a [`ThesisReport`].

use std::fmt::Write as _;

use crate::generator::ThesisReport;

const NONE_IDENTIFIED: &str = "None identified";

/// Render `report` as a Markdown document: topic heading, one section per
/// category group plus sources, then the analyst summary.
#[must_use]
pub fn render_markdown(report: &ThesisReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Investment Thesis: {}", report.topic);

    push_section(&mut out, "Key Themes", &report.thesis.key_themes);
    push_section(&mut out, "Risks", &report.thesis.risks);
    push_section(&mut out, "Investment Signals", &report.thesis.investment_signals);
    push_section(&mut out, "Sources", &report.thesis.sources);

    let _ = writeln!(out, "\n## Analyst Summary\n");
    if report.summary.trim().is_empty() {
        let _ = writeln!(out, "No summary available.");
    } else {
        let _ = writeln!(out, "{}", report.summary.trim());
    }
    let _ = writeln!(out, "\n_Summarized by `{}`._", report.summarizer);
    out
}

fn push_section(out: &mut String, heading: &str, items: &[String]) {
    let _ = writeln!(out, "\n## {heading}\n");
    if items.is_empty() {
        let _ = writeln!(out, "{NONE_IDENTIFIED}");
        return;
    }
    for item in items {
        let _ = writeln!(out, "- {item}");
    }
}
