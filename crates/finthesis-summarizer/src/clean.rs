//! Article text cleanup: promotional phrases, boilerplate lines, whitespace.

use std::sync::LazyLock;

use regex::Regex;

/// Promotional / ad phrases common in scraped fintech news.
pub(crate) static PROMO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)register now|early bird|save up to|\$\d+ off|buy tickets|get tickets|sign up|subscribe now|learn more|click here|limited time",
    )
    .expect("valid promo regex")
});

/// An "About the author" header and the paragraph under it, up to the next
/// blank line or the end of the text.
static AUTHOR_BIO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*about the author\b.*(?:\r?\n[ \t]*\S.*)*")
        .expect("valid author bio regex")
});

/// Whole lines that carry no article content: contact blocks, bylines,
/// newsletter and social prompts, event promotions.
static BOILERPLATE_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:you can contact\b.*|e-?mail:.*|discover your next\b.*|hear from \d+\+.*|by \w+ \w+|follow us on\b.*|.*\bsubscribe\b.*\bnewsletter\b.*|visit\b.*\bwebsite\b.*)$",
    )
    .expect("valid boilerplate regex")
});

static SPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("valid whitespace regex"));

/// Remove noise from article text before it is summarized.
///
/// Drops author bio blocks and boilerplate lines, replaces promotional
/// phrases with a space, collapses runs of spaces, trims every line, and
/// removes blank lines.
#[must_use]
pub fn clean_article_text(text: &str) -> String {
    AUTHOR_BIO_RE
        .replace_all(text, "")
        .lines()
        .map(str::trim)
        .filter(|line| !BOILERPLATE_LINE_RE.is_match(line))
        .map(|line| {
            let without_promo = PROMO_RE.replace_all(line, " ");
            SPACE_RUN_RE
                .replace_all(&without_promo, " ")
                .trim()
                .to_string()
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `true` if the text contains a promotional phrase.
#[must_use]
pub fn is_promotional(text: &str) -> bool {
    PROMO_RE.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_stays_empty() {
        assert_eq!(clean_article_text(""), "");
    }

    #[test]
    fn removes_promotional_phrases_inline() {
        let cleaned = clean_article_text("Stripe expands lending. Click here to read more.");
        assert_eq!(cleaned, "Stripe expands lending. to read more.");
    }

    #[test]
    fn removes_dollar_off_promos() {
        assert!(is_promotional("Get $200 off your pass"));
        assert!(!is_promotional("Revenue rose $200 million"));
    }

    #[test]
    fn drops_boilerplate_lines() {
        let text = "Klarna files for IPO.\nBy Jane Doe\nEmail: jane@example.com\nFollow us on X for updates\nSubscribe to our weekly newsletter\nThe listing values Klarna at $15 billion.";
        assert_eq!(
            clean_article_text(text),
            "Klarna files for IPO.\nThe listing values Klarna at $15 billion."
        );
    }

    #[test]
    fn drops_author_bio_up_to_blank_line() {
        let text = "Klarna files for IPO.\nAbout the author\nJane Doe covers payments and lending for the newsletter desk.\nShe previously reported on banks.\n\nThe listing values Klarna at $15 billion.";
        let cleaned = clean_article_text(text);
        assert_eq!(
            cleaned,
            "Klarna files for IPO.\nThe listing values Klarna at $15 billion."
        );
    }

    #[test]
    fn author_bio_at_end_of_text_is_dropped() {
        let text = "Neobanks gain deposits.\n  About the Author  \nJane Doe writes about fintech.";
        assert_eq!(clean_article_text(text), "Neobanks gain deposits.");
    }

    #[test]
    fn keeps_sentences_that_only_mention_boilerplate_words() {
        let text = "Regulators said the newsletter business is growing.";
        assert_eq!(clean_article_text(text), text);
    }

    #[test]
    fn collapses_whitespace_and_blank_lines() {
        let text = "  Neobanks   grow.  \n\n\n\t Adoption\trises.  ";
        assert_eq!(clean_article_text(text), "Neobanks grow.\nAdoption rises.");
    }
}
