use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// The three category taxonomies a thesis is ranked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryGroupKind {
    Themes,
    Risks,
    Signals,
}

impl CategoryGroupKind {
    pub const ALL: [CategoryGroupKind; 3] = [
        CategoryGroupKind::Themes,
        CategoryGroupKind::Risks,
        CategoryGroupKind::Signals,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryGroupKind::Themes => "themes",
            CategoryGroupKind::Risks => "risks",
            CategoryGroupKind::Signals => "signals",
        }
    }
}

impl std::fmt::Display for CategoryGroupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled keyword set, e.g. `Embedded Finance: [embedded finance, baas]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub label: String,
    pub keywords: Vec<String>,
}

impl CategoryEntry {
    pub fn new<I, S>(label: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

/// An ordered list of entries. Declaration order is the ranking tie-break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    kind: CategoryGroupKind,
    entries: Vec<CategoryEntry>,
}

impl CategoryGroup {
    #[must_use]
    pub fn kind(&self) -> CategoryGroupKind {
        self.kind
    }

    #[must_use]
    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Validated category taxonomy: themes, risks, and investment signals.
///
/// Keywords are stored trimmed and lowercased, deduplicated within each
/// entry. Labels are unique (case-insensitively) within a group. The table is
/// read-only once built; share it by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    themes: CategoryGroup,
    risks: CategoryGroup,
    signals: CategoryGroup,
}

impl CategoryTable {
    /// Build and validate a table from its three groups.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for an empty label, a duplicate
    /// label within a group, an entry without keywords, or a blank keyword.
    pub fn new(
        themes: Vec<CategoryEntry>,
        risks: Vec<CategoryEntry>,
        signals: Vec<CategoryEntry>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            themes: build_group(CategoryGroupKind::Themes, themes)?,
            risks: build_group(CategoryGroupKind::Risks, risks)?,
            signals: build_group(CategoryGroupKind::Signals, signals)?,
        })
    }

    /// The built-in fintech taxonomy (12 themes, 10 risks, 10 signals).
    #[must_use]
    pub fn fintech() -> Self {
        Self {
            themes: static_group(CategoryGroupKind::Themes, FINTECH_THEMES),
            risks: static_group(CategoryGroupKind::Risks, FINTECH_RISKS),
            signals: static_group(CategoryGroupKind::Signals, FINTECH_SIGNALS),
        }
    }

    /// Parse and validate a table from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CategoryFileParse`] on malformed YAML,
    /// [`ConfigError::MissingGroup`] if `themes`, `risks`, or `signals` is
    /// absent, and [`ConfigError::Validation`] per [`CategoryTable::new`].
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let raw: CategoryFile = serde_yaml::from_str(yaml)?;
        let themes = raw
            .themes
            .ok_or_else(|| ConfigError::MissingGroup(CategoryGroupKind::Themes.to_string()))?;
        let risks = raw
            .risks
            .ok_or_else(|| ConfigError::MissingGroup(CategoryGroupKind::Risks.to_string()))?;
        let signals = raw
            .signals
            .ok_or_else(|| ConfigError::MissingGroup(CategoryGroupKind::Signals.to_string()))?;
        Self::new(themes, risks, signals)
    }

    #[must_use]
    pub fn group(&self, kind: CategoryGroupKind) -> &CategoryGroup {
        match kind {
            CategoryGroupKind::Themes => &self.themes,
            CategoryGroupKind::Risks => &self.risks,
            CategoryGroupKind::Signals => &self.signals,
        }
    }

    #[must_use]
    pub fn themes(&self) -> &CategoryGroup {
        &self.themes
    }

    #[must_use]
    pub fn risks(&self) -> &CategoryGroup {
        &self.risks
    }

    #[must_use]
    pub fn signals(&self) -> &CategoryGroup {
        &self.signals
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::fintech()
    }
}

/// On-disk shape of a category table. Groups are optional here so a missing
/// group is reported by name instead of as a generic parse error.
#[derive(Debug, Deserialize)]
struct CategoryFile {
    themes: Option<Vec<CategoryEntry>>,
    risks: Option<Vec<CategoryEntry>>,
    signals: Option<Vec<CategoryEntry>>,
}

/// Load and validate a category table from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_category_table(path: &Path) -> Result<CategoryTable, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CategoryFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    CategoryTable::from_yaml_str(&content)
}

fn build_group(
    kind: CategoryGroupKind,
    entries: Vec<CategoryEntry>,
) -> Result<CategoryGroup, ConfigError> {
    let mut seen_labels = HashSet::new();
    let mut normalized = Vec::with_capacity(entries.len());

    for entry in entries {
        let label = entry.label.trim().to_string();
        if label.is_empty() {
            return Err(ConfigError::Validation(format!(
                "{kind}: category label must be non-empty"
            )));
        }

        if !seen_labels.insert(label.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "{kind}: duplicate category label '{label}'"
            )));
        }

        if entry.keywords.is_empty() {
            return Err(ConfigError::Validation(format!(
                "{kind}: category '{label}' has no keywords"
            )));
        }

        let mut seen_keywords = HashSet::new();
        let mut keywords = Vec::with_capacity(entry.keywords.len());
        for keyword in &entry.keywords {
            let keyword = keyword.trim().to_lowercase();
            if keyword.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{kind}: category '{label}' has a blank keyword"
                )));
            }
            if seen_keywords.insert(keyword.clone()) {
                keywords.push(keyword);
            }
        }

        normalized.push(CategoryEntry { label, keywords });
    }

    Ok(CategoryGroup {
        kind,
        entries: normalized,
    })
}

fn static_group(kind: CategoryGroupKind, data: &[(&str, &[&str])]) -> CategoryGroup {
    CategoryGroup {
        kind,
        entries: data
            .iter()
            .map(|&(label, keywords)| CategoryEntry::new(label, keywords.iter().copied()))
            .collect(),
    }
}

const FINTECH_THEMES: &[(&str, &[&str])] = &[
    (
        "AI-Powered Automation",
        &["ai agent", "ai-powered", "automation", "invoicing", "settlement", "workflow"],
    ),
    (
        "Digital Payments",
        &["payment link", "payment request", "cash app", "transfer", "peer-to-peer", "p2p", "payment"],
    ),
    (
        "Blockchain & Web3",
        &["blockchain", "crypto", "web3", "defi", "tokenization", "token", "wallet"],
    ),
    (
        "Digital Lending",
        &["lending", "loan", "borrowing", "credit", "bnpl", "buy now pay later"],
    ),
    (
        "Neobanking",
        &["neobank", "digital bank", "challenger bank", "online banking"],
    ),
    (
        "WealthTech",
        &["wealth", "robo-advisor", "portfolio", "asset management", "wealthtech"],
    ),
    (
        "B2B Finance",
        &["b2b", "enterprise", "corporate finance", "treasury", "accounts payable"],
    ),
    (
        "RegTech & Compliance",
        &["regtech", "kyc", "aml", "compliance", "regulation", "regulatory"],
    ),
    (
        "Embedded Finance",
        &["embedded finance", "banking as a service", "baas", "api banking"],
    ),
    (
        "Consumer Finance",
        &["consumer", "retail finance", "personal finance", "gen z", "millennial"],
    ),
    (
        "Fintech Infrastructure",
        &["infrastructure", "api", "integration", "platform", "sdk", "middleware"],
    ),
    (
        "Insurtech",
        &["insurance", "insurtech", "underwriting", "premium", "claims"],
    ),
];

const FINTECH_RISKS: &[(&str, &[&str])] = &[
    (
        "Regulatory Risk",
        &["regulatory", "regulation", "compliance", "sec", "gdpr", "enforcement", "ban"],
    ),
    (
        "Cybersecurity Risk",
        &["breach", "hack", "fraud", "security", "vulnerability", "phishing", "data leak"],
    ),
    (
        "Market Adoption Risk",
        &["adoption", "user resistance", "slow uptake", "trust", "awareness"],
    ),
    (
        "Competitive Pressure",
        &["competition", "competitive", "incumbent", "big tech", "rival", "market share"],
    ),
    (
        "Credit & Liquidity Risk",
        &["credit risk", "default", "liquidity", "insolvency", "bad debt", "npls"],
    ),
    (
        "Macroeconomic Risk",
        &["recession", "downturn", "inflation", "interest rate", "macro"],
    ),
    (
        "Data Privacy Risk",
        &["privacy", "data breach", "pii", "personal data", "gdpr", "data protection"],
    ),
    (
        "Scalability Risk",
        &["scaling", "infrastructure cost", "technical debt", "outage", "downtime"],
    ),
    (
        "Geopolitical Risk",
        &["geopolit", "sanction", "cross-border", "tariff", "trade war"],
    ),
    (
        "Concentration Risk",
        &["concentration", "single vendor", "platform dependency", "lock-in"],
    ),
];

const FINTECH_SIGNALS: &[(&str, &[&str])] = &[
    (
        "B2B Fintech Expansion",
        &["b2b", "enterprise", "corporate", "invoicing", "accounts payable", "treasury"],
    ),
    (
        "AI-Driven Financial Tools",
        &["ai", "llm", "generative", "chatbot", "financial advisor", "automation"],
    ),
    (
        "Emerging Market Growth",
        &["emerging market", "india", "africa", "southeast asia", "latam", "developing"],
    ),
    (
        "Payment Infrastructure",
        &["payment rail", "payment network", "real-time payment", "instant payment"],
    ),
    (
        "Embedded Finance Opportunity",
        &["embedded", "baas", "api-first", "white-label", "platform"],
    ),
    (
        "Consumer Fintech Adoption",
        &["gen z", "millennial", "consumer adoption", "retail investor", "mass market"],
    ),
    (
        "Alternative Lending Growth",
        &["bnpl", "alternative lending", "revenue-based", "micro-lending", "credit access"],
    ),
    (
        "Crypto & Web3 Opportunity",
        &["crypto", "defi", "nft", "tokenization", "web3", "blockchain"],
    ),
    (
        "RegTech Investment Signal",
        &["regtech", "compliance automation", "kyc", "aml", "regulatory tech"],
    ),
    (
        "WealthTech Disruption",
        &["robo-advisor", "wealthtech", "wealth management", "retail investing"],
    ),
];

#[cfg(test)]
#[path = "categories_test.rs"]
mod tests;
