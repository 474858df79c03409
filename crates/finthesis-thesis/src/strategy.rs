//! How a category's keywords are turned into a hit count.

/// Scores one category's keywords against lowercased text.
pub trait ScoringStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// `text_lower` is already lowercased; `keywords` are lowercase too.
    fn score(&self, text_lower: &str, keywords: &[String]) -> usize;
}

/// Every keyword occurrence counts, so a keyword repeated three times adds
/// three hits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OccurrenceCount;

impl ScoringStrategy for OccurrenceCount {
    fn name(&self) -> &'static str {
        "occurrence-count"
    }

    fn score(&self, text_lower: &str, keywords: &[String]) -> usize {
        keywords
            .iter()
            .map(|keyword| count_occurrences(text_lower, keyword))
            .sum()
    }
}

/// Each keyword counts at most once, however often it appears.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DistinctKeywordCount;

impl ScoringStrategy for DistinctKeywordCount {
    fn name(&self) -> &'static str {
        "distinct-keyword-count"
    }

    fn score(&self, text_lower: &str, keywords: &[String]) -> usize {
        keywords
            .iter()
            .filter(|keyword| count_occurrences(text_lower, keyword) > 0)
            .count()
    }
}

/// Keywords this short must match a whole word.
const SHORT_KEYWORD_MAX_CHARS: usize = 3;

/// Non-overlapping occurrences of `keyword` that start at a word boundary.
///
/// A longer keyword may run into a longer word: `digital bank` is found in
/// `digital banking`, `geopolit` in `geopolitical`. Keywords of up to three
/// characters must also end at a word boundary, so `ban` is not found in
/// `banking` nor `ai` in `aim`. Nothing is ever found mid-word: `ai` does
/// not match `said`.
#[must_use]
pub fn count_occurrences(text: &str, keyword: &str) -> usize {
    if keyword.is_empty() {
        return 0;
    }
    let whole_word = keyword.chars().count() <= SHORT_KEYWORD_MAX_CHARS;
    text.match_indices(keyword)
        .filter(|&(idx, _)| starts_at_word_boundary(text, idx))
        .filter(|&(idx, m)| !whole_word || ends_at_word_boundary(text, idx + m.len()))
        .count()
}

fn starts_at_word_boundary(text: &str, idx: usize) -> bool {
    text[..idx]
        .chars()
        .next_back()
        .is_none_or(|c| !c.is_alphanumeric())
}

fn ends_at_word_boundary(text: &str, end: usize) -> bool {
    text[end..].chars().next().is_none_or(|c| !c.is_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kws(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn counts_every_occurrence() {
        assert_eq!(count_occurrences("crypto, crypto and more crypto", "crypto"), 3);
    }

    #[test]
    fn matches_prefix_of_longer_word() {
        assert_eq!(count_occurrences("we offer digital banking", "digital bank"), 1);
        assert_eq!(count_occurrences("geopolitical tension", "geopolit"), 1);
        assert_eq!(count_occurrences("peer-to-peer transfers", "transfer"), 1);
    }

    #[test]
    fn ignores_matches_inside_words() {
        assert_eq!(count_occurrences("the ceo said so", "ai"), 0);
        assert_eq!(count_occurrences("urban policy", "ban"), 0);
    }

    #[test]
    fn short_keywords_match_whole_words_only() {
        assert_eq!(count_occurrences("digital banking for consumers", "ban"), 0);
        assert_eq!(count_occurrences("the financial sector", "sec"), 0);
        assert_eq!(count_occurrences("we aim to grow", "ai"), 0);
        assert_eq!(count_occurrences("the sec and a ban", "sec"), 1);
        assert_eq!(count_occurrences("an ai-driven tool", "ai"), 1);
        assert_eq!(count_occurrences("p2p lending", "p2p"), 1);
    }

    #[test]
    fn matches_after_punctuation() {
        assert_eq!(count_occurrences("(ai) and \"ai\"-powered", "ai"), 2);
    }

    #[test]
    fn empty_inputs_score_zero() {
        assert_eq!(count_occurrences("", "payments"), 0);
        assert_eq!(count_occurrences("payments", ""), 0);
    }

    #[test]
    fn occurrence_strategy_sums_all_keywords() {
        let keywords = kws(&["embedded", "finance"]);
        let text = "embedded finance and more finance";
        assert_eq!(OccurrenceCount.score(text, &keywords), 3);
    }

    #[test]
    fn distinct_strategy_caps_each_keyword_at_one() {
        let keywords = kws(&["embedded", "finance", "baas"]);
        let text = "embedded finance and more finance";
        assert_eq!(DistinctKeywordCount.score(text, &keywords), 2);
    }

    #[test]
    fn strategy_names() {
        assert_eq!(OccurrenceCount.name(), "occurrence-count");
        assert_eq!(DistinctKeywordCount.name(), "distinct-keyword-count");
    }
}
