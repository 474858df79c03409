use serde::{Deserialize, Serialize};

/// Ranked, categorized investment thesis.
///
/// Field names are the wire format: `key_themes`, `risks`,
/// `investment_signals`, `sources`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredThesis {
    pub key_themes: Vec<String>,
    pub risks: Vec<String>,
    pub investment_signals: Vec<String>,
    /// Deduplicated source identifiers, in first-seen order.
    pub sources: Vec<String>,
}

impl StructuredThesis {
    /// `true` when no category in any group matched.
    #[must_use]
    pub fn has_no_categories(&self) -> bool {
        self.key_themes.is_empty() && self.risks.is_empty() && self.investment_signals.is_empty()
    }
}
