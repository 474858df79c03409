//! Punctuation-based sentence splitting.
//!
//! A sentence ends at `.`, `!`, or `?` (plus any trailing closing quotes or
//! brackets) when followed by whitespace and then an uppercase letter, a
//! digit, an opening quote/bracket, or the end of the text. A lone `.` after a
//! known abbreviation or a single-letter initial is not a boundary. Decimals
//! such as `3.5%` never split because no whitespace follows the dot.

use std::sync::LazyLock;

use regex::Regex;

/// Lowercased abbreviations (without the final dot) that do not end a
/// sentence.
pub const ABBREVIATIONS: &[&str] = &[
    "inc", "corp", "ltd", "co", "llc", "plc", "bros", "mr", "mrs", "ms", "dr", "prof", "sr", "jr",
    "st", "vs", "etc", "e.g", "i.e", "u.s", "u.k", "u.n", "e.u", "approx", "dept", "fig", "gov",
    "sen", "rep", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov",
    "dec",
];

/// A lowercase word glued to a capitalized word by `.` or `,` with no space,
/// e.g. `markets.The`. Typical of scraped pages that lost their markup.
static GLUED_PUNCTUATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\p{Ll}{2,}[.,]\p{Lu}\p{Ll}").expect("valid glued punctuation regex")
});

/// Split `text` into trimmed, non-empty sentences in reading order.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let byte_at = |idx: usize| chars.get(idx).map_or(text.len(), |&(b, _)| b);

    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (dot_byte, ch) = chars[i];
        if !is_terminal(ch) {
            i += 1;
            continue;
        }

        // Absorb "?!", "...", and closing quotes/brackets into this boundary.
        let mut end = i + 1;
        while end < chars.len() && (is_terminal(chars[end].1) || is_closing(chars[end].1)) {
            end += 1;
        }

        let lone_dot = ch == '.' && !chars[i + 1..end].iter().any(|&(_, c)| is_terminal(c));
        let guarded = lone_dot && ends_with_abbreviation(&text[start..dot_byte]);

        if !guarded && followed_by_sentence_start(&chars, end) {
            let end_byte = byte_at(end);
            push_trimmed(&mut sentences, &text[start..end_byte]);
            start = end_byte;
        }
        i = end;
    }

    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

/// Number of whitespace-separated words.
#[must_use]
pub fn word_count(sentence: &str) -> usize {
    sentence.split_whitespace().count()
}

/// `true` if the sentence ends in `.`, `!`, or `?`, ignoring closing quotes
/// and brackets.
#[must_use]
pub fn has_terminal_punctuation(sentence: &str) -> bool {
    sentence
        .trim_end()
        .trim_end_matches(is_closing)
        .ends_with(is_terminal)
}

/// `true` if the sentence shows `word.Word` style gluing from a lossy scrape.
#[must_use]
pub fn has_scrape_artifact(sentence: &str) -> bool {
    GLUED_PUNCTUATION_RE.is_match(sentence)
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, fragment: &'a str) {
    let fragment = fragment.trim();
    if !fragment.is_empty() {
        sentences.push(fragment);
    }
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}')
}

fn is_opening(c: char) -> bool {
    matches!(c, '"' | '\'' | '(' | '[' | '\u{201c}' | '\u{2018}')
}

/// Whitespace at `idx`, then end of text or a plausible sentence opener.
fn followed_by_sentence_start(chars: &[(usize, char)], idx: usize) -> bool {
    match chars.get(idx) {
        None => true,
        Some(&(_, c)) if !c.is_whitespace() => false,
        Some(_) => match chars[idx..].iter().find(|&&(_, c)| !c.is_whitespace()) {
            None => true,
            Some(&(_, c)) => c.is_uppercase() || c.is_ascii_digit() || is_opening(c),
        },
    }
}

/// Words that take a single capital letter as a name rather than an
/// initial: `Series A.`, `Class B.`, `Plan C.`.
const LETTER_LABEL_WORDS: &[&str] = &["series", "class", "plan", "tier", "round", "phase", "type"];

fn follows_label_word(before: &str) -> bool {
    before
        .split_whitespace()
        .next_back()
        .is_some_and(|w| LETTER_LABEL_WORDS.contains(&w.to_lowercase().as_str()))
}

/// `true` if `prefix` ends with a known abbreviation or a single-letter
/// initial such as `J`.
fn ends_with_abbreviation(prefix: &str) -> bool {
    let word_start = prefix
        .char_indices()
        .rev()
        .find(|&(_, c)| !(c.is_alphanumeric() || c == '.'))
        .map_or(0, |(idx, c)| idx + c.len_utf8());
    let word = &prefix[word_start..];
    if word.is_empty() {
        return false;
    }

    let mut letters = word.chars();
    if let (Some(first), None) = (letters.next(), letters.next()) {
        if first.is_uppercase() {
            return !follows_label_word(&prefix[..word_start]);
        }
    }

    let lower = word.to_lowercase();
    ABBREVIATIONS.contains(&lower.as_str())
}
