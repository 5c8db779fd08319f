//! Section-based full-text search over plain documentation files.
//!
//! This module provides tokenization, section extraction, the candidate word
//! set used for cheap query rejection, and relevance scoring.

pub(crate) mod scoring;
pub(crate) mod section;
pub(crate) mod tokenize;
pub(crate) mod vocabulary;

pub use scoring::score;
pub use section::{Section, extract_sections};
pub use tokenize::tokenize;
pub use vocabulary::Vocabulary;
