//! Fintech salience lexicon used to rank sentences for extraction.
//!
//! This vocabulary only decides which sentences are worth keeping. It is
//! separate from the category table the thesis scorer ranks against.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Domain terms, lowercase. Multi-word entries match as consecutive tokens.
pub const FINTECH_TERMS: &[&str] = &[
    // General fintech
    "fintech",
    "financial",
    "finance",
    "banking",
    // Payments & transfers
    "payment",
    "transfer",
    "transaction",
    "wallet",
    "peer-to-peer",
    "p2p",
    "cash app",
    "venmo",
    "stripe",
    "square",
    "paypal",
    // Digital banking
    "neobank",
    "digital bank",
    "challenger bank",
    "online banking",
    // Lending & credit
    "lending",
    "loan",
    "credit",
    "borrowing",
    "bnpl",
    "buy now pay later",
    "credit score",
    "underwriting",
    // Blockchain & crypto
    "blockchain",
    "crypto",
    "bitcoin",
    "ethereum",
    "web3",
    "defi",
    "nft",
    "tokenization",
    "token",
    "smart contract",
    // B2B finance
    "b2b",
    "enterprise",
    "corporate",
    "invoicing",
    "accounts payable",
    "treasury",
    "expense management",
    "payroll",
    // Wealthtech & investment
    "wealth",
    "investment",
    "portfolio",
    "robo-advisor",
    "trading",
    "stock",
    "asset management",
    "retail investor",
    // Embedded finance
    "embedded finance",
    "baas",
    "banking as a service",
    "api-first",
    "white-label",
    // Compliance & risk
    "compliance",
    "regulation",
    "regulatory",
    "kyc",
    "aml",
    "regtech",
    "fraud",
    "security",
    "risk",
    "governance",
    // Infrastructure
    "api",
    "integration",
    "platform",
    "sdk",
    "middleware",
    "infrastructure",
    // AI & automation
    "ai",
    "artificial intelligence",
    "machine learning",
    "automation",
    "llm",
    "generative",
    "chatbot",
    "agent",
    // Market & adoption
    "market",
    "growth",
    "emerging",
    "adoption",
    "expansion",
    "opportunity",
    "startup",
    "innovation",
    "disruption",
];

/// Lowercase word tokens: letters and digits, with internal hyphens kept so
/// `peer-to-peer` stays one token.
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:-[\p{L}\p{N}]+)*").expect("valid word regex")
});

/// Split text into lowercase word tokens.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Salience vocabulary split into single-word terms and multi-word phrases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    words: HashSet<String>,
    phrases: Vec<Vec<String>>,
}

impl Lexicon {
    /// Build a lexicon from arbitrary terms. Terms are tokenized the same way
    /// sentences are; terms that produce no tokens are ignored.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = HashSet::new();
        let mut phrases: Vec<Vec<String>> = Vec::new();
        for term in terms {
            let mut tokens = tokenize(term.as_ref());
            match tokens.len() {
                0 => {}
                1 => {
                    words.extend(tokens.pop());
                }
                _ => {
                    if !phrases.contains(&tokens) {
                        phrases.push(tokens);
                    }
                }
            }
        }
        Self { words, phrases }
    }

    /// The built-in fintech vocabulary.
    #[must_use]
    pub fn fintech() -> Self {
        Self::new(FINTECH_TERMS)
    }

    /// Number of distinct terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len() + self.phrases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.phrases.is_empty()
    }

    /// Count lexicon hits in a token stream.
    ///
    /// Every token equal to a single-word term scores one, and every window
    /// of consecutive tokens equal to a phrase scores one. Repeats count each
    /// time. A trailing `s` is folded so `payments` hits `payment`.
    #[must_use]
    pub fn score_tokens(&self, tokens: &[String]) -> usize {
        let word_hits = tokens
            .iter()
            .filter(|token| self.contains_word(token))
            .count();

        let phrase_hits: usize = self
            .phrases
            .iter()
            .map(|phrase| {
                tokens
                    .windows(phrase.len())
                    .filter(|window| phrase_matches(window, phrase))
                    .count()
            })
            .sum();

        word_hits + phrase_hits
    }

    /// Tokenize and score `text`.
    #[must_use]
    pub fn score(&self, text: &str) -> usize {
        self.score_tokens(&tokenize(text))
    }

    fn contains_word(&self, token: &str) -> bool {
        self.words.contains(token) || singular(token).is_some_and(|s| self.words.contains(s))
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::fintech()
    }
}

fn phrase_matches(window: &[String], phrase: &[String]) -> bool {
    let last = phrase.len() - 1;
    window.iter().zip(phrase).enumerate().all(|(i, (token, term))| {
        token == term || (i == last && singular(token) == Some(term.as_str()))
    })
}

/// Naive plural folding: `payments` -> `payment`. Leaves `ss` endings and
/// very short tokens alone.
fn singular(token: &str) -> Option<&str> {
    if token.len() > 3 && !token.ends_with("ss") {
        token.strip_suffix('s')
    } else {
        None
    }
}
