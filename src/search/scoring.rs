//! Section relevance scoring.

use super::{Section, tokenize};
use ahash::AHashSet;

/// Full query found verbatim in the section body.
const PHRASE_IN_CONTENT: f64 = 10.0;
/// Full query found verbatim in the section title.
const PHRASE_IN_TITLE: f64 = 15.0;
/// Per query token present in the body.
const TOKEN_IN_CONTENT: f64 = 2.0;
/// Per query token present in the title.
const TOKEN_IN_TITLE: f64 = 5.0;
/// Multiplier for sections at header level 2 or shallower.
const SHALLOW_SECTION_BOOST: f64 = 1.2;
const SHALLOW_SECTION_MAX_LEVEL: usize = 2;

/// Scores `section` against a query.
///
/// `query_tokens` is the tokenized query and `raw_query` the original string.
/// The additive terms are:
/// - 10 if the whole query appears in the content (case-insensitive)
/// - 15 if the whole query appears in the title
/// - 2 per query token among the content tokens
/// - 5 per query token among the title tokens
///
/// The sum is multiplied by 1.2 for sections of level 0, 1 or 2. A score of 0
/// means the section does not match.
pub fn score(section: &Section, query_tokens: &AHashSet<String>, raw_query: &str) -> f64 {
    let query = raw_query.to_lowercase();
    let content = section.content.to_lowercase();
    let title = section.title.to_lowercase();

    let mut score = 0.0;

    if content.contains(&query) {
        score += PHRASE_IN_CONTENT;
    }
    if title.contains(&query) {
        score += PHRASE_IN_TITLE;
    }

    let content_matches = query_tokens
        .iter()
        .filter(|token| section.words.contains(*token))
        .count();
    score += content_matches as f64 * TOKEN_IN_CONTENT;

    let title_words = tokenize(&title);
    let title_matches = query_tokens
        .iter()
        .filter(|token| title_words.contains(*token))
        .count();
    score += title_matches as f64 * TOKEN_IN_TITLE;

    if section.level <= SHALLOW_SECTION_MAX_LEVEL {
        score *= SHALLOW_SECTION_BOOST;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    fn section(title: &str, content: &str, level: usize) -> Section {
        Section {
            title: title.to_string(),
            content: content.to_string(),
            level,
            start_line: 1,
            file: "doc.md".to_string(),
            words: tokenize(content),
        }
    }

    fn score_query(section: &Section, query: &str) -> f64 {
        score(section, &tokenize(query), query)
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_phrase_and_tokens_in_content() {
        let s = section("Azure Overview", "Load Balancer distributes traffic", 1);
        // (10 phrase + 2 * 2 tokens) * 1.2
        check!(approx_eq(score_query(&s, "Load Balancer"), 16.8));
    }

    #[rstest]
    #[case(0, 1.2)]
    #[case(1, 1.2)]
    #[case(2, 1.2)]
    #[case(3, 1.0)]
    #[case(6, 1.0)]
    fn test_level_boost(#[case] level: usize, #[case] factor: f64) {
        let s = section("Notes", "gateway", level);
        // 10 phrase + 2 token
        check!(approx_eq(score_query(&s, "gateway"), 12.0 * factor));
    }

    #[test]
    fn test_title_phrase_outscores_content_phrase() {
        let in_title = section("Private Link", "unrelated body", 3);
        let in_content = section("Unrelated", "private link body", 3);

        let title_score = score_query(&in_title, "private link");
        let content_score = score_query(&in_content, "private link");
        // 15 + 2 * 5 versus 10 + 2 * 2
        check!(approx_eq(title_score, 25.0));
        check!(approx_eq(content_score, 14.0));
        check!(title_score > content_score);
    }

    #[test]
    fn test_no_match_scores_zero() {
        let s = section("DNS", "name resolution", 1);
        check!(score_query(&s, "firewall") == 0.0);
    }

    #[test]
    fn test_case_insensitive() {
        let s = section("VNet", "Virtual Network Peering", 4);
        check!(score_query(&s, "virtual network") == score_query(&s, "VIRTUAL NETWORK"));
    }

    #[rstest]
    #[case("peering")]
    #[case("peering routes")]
    #[case("network")]
    fn test_adding_present_token_never_decreases(#[case] base: &str) {
        let s = section("Peering", "network peering routes traffic between networks", 2);
        let before = score_query(&s, base);
        let after = score(&s, &tokenize(&format!("{} traffic", base)), base);
        check!(after >= before);
    }
}
