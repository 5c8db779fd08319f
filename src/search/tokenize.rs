//! Query and document tokenization.

use ahash::AHashSet;
use regex::Regex;
use std::sync::LazyLock;

/// A token is a maximal run of at least two word characters.
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w{2,}\b").expect("token pattern is valid"));

/// Splits `text` into its set of case-folded tokens.
///
/// Single characters are dropped, and there is no stemming or stop-word removal:
/// `"Load Balancer"` yields `{"load", "balancer"}`.
pub fn tokenize(text: &str) -> AHashSet<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
