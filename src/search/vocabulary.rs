//! Candidate word set: every token ever indexed, used to reject hopeless queries.
//!
//! The set is exact rather than probabilistic and only ever grows. Tokens from
//! evicted or deleted files stay in it, so a query may pass the check and still
//! find nothing, but a query whose tokens were indexed is never rejected. Memory
//! grows with the number of distinct tokens seen over the process lifetime.

use super::tokenize;
use crate::fingerprint::Fingerprint;
use ahash::AHashSet;

/// Process-wide record of indexed tokens and indexed file versions.
#[derive(Debug, Default)]
pub struct Vocabulary {
    words: AHashSet<String>,
    indexed: AHashSet<Fingerprint>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizes `text`, adding every token to the candidate set.
    ///
    /// Returns the same token set for the same text, but always records the
    /// tokens as a side effect.
    pub fn index(&mut self, text: &str) -> AHashSet<String> {
        let tokens = tokenize(text);
        for token in &tokens {
            if !self.words.contains(token) {
                self.words.insert(token.clone());
            }
        }
        tokens
    }

    /// Remembers that the tokens of this file version have been recorded.
    pub fn mark_indexed(&mut self, fingerprint: Fingerprint) {
        self.indexed.insert(fingerprint);
    }

    pub fn is_indexed(&self, fingerprint: Fingerprint) -> bool {
        self.indexed.contains(&fingerprint)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Whether any query token was ever indexed.
    pub fn contains_any<'a>(&self, tokens: impl IntoIterator<Item = &'a String>) -> bool {
        tokens.into_iter().any(|token| self.words.contains(token))
    }

    /// Known words extending `partial`, shortest first.
    ///
    /// The prefix is case-folded and only words strictly longer than it qualify.
    /// Words of equal length are ordered alphabetically.
    pub fn suggest(&self, partial: &str, limit: usize) -> Vec<String> {
        let prefix = partial.to_lowercase();
        let mut matches: Vec<&String> = self
            .words
            .iter()
            .filter(|word| word.len() > prefix.len() && word.starts_with(&prefix))
            .collect();

        matches.sort_by(|a, b| a.chars().count().cmp(&b.chars().count()).then(a.cmp(b)));
        matches.into_iter().take(limit).cloned().collect()
    }

    /// Number of distinct words recorded.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
