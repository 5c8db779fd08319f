//! The documentation search engine.
//!
//! [`SearchEngine`] ties the pieces together: it enumerates documents under a
//! root, fingerprints them, fetches or rebuilds their sections through the
//! [`IndexCache`], rejects queries none of whose tokens were ever indexed, and
//! ranks the remaining sections.

use crate::cache::{IndexCache, Sections};
use crate::config::Config;
use crate::error::EngineError;
use crate::files::{self, FileInfo, NameFilter};
use crate::fingerprint::{Fingerprint, fingerprint};
use crate::search::{Vocabulary, extract_sections, score, tokenize};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Characters of section content included in a result.
pub const PREVIEW_CHARS: usize = 500;

/// Maximum number of suggestions returned by [`SearchEngine::suggest`].
pub const MAX_SUGGESTIONS: usize = 10;

/// One ranked section.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    /// Path relative to the documentation root
    pub file: String,
    /// Section title
    pub title: String,
    /// Section content, truncated to [`PREVIEW_CHARS`] with a trailing `...`
    pub content: String,
    pub score: f64,
    /// 1-based line of the section header
    pub line: usize,
    /// Header level, 0 for the file-level section
    pub level: usize,
}

/// In-memory search engine over one documentation directory.
///
/// Holds the two pieces of shared state: the index cache and the candidate word
/// set. Both are internally synchronized, so an engine can be shared behind an
/// `Arc` across concurrent requests.
#[derive(Debug)]
pub struct SearchEngine {
    root: PathBuf,
    extensions: Vec<String>,
    cache: Mutex<IndexCache>,
    vocabulary: RwLock<Vocabulary>,
}

impl SearchEngine {
    /// Create an engine over `root` with default settings.
    ///
    /// The root does not need to exist; every operation over a missing root
    /// returns empty results.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_config(&Config::with_root(root))
    }

    /// Create an engine from a full configuration.
    pub fn with_config(config: &Config) -> Self {
        Self {
            root: config.root.clone(),
            extensions: config.extensions.clone(),
            cache: Mutex::new(IndexCache::new(config.cache_capacity)),
            vocabulary: RwLock::new(Vocabulary::new()),
        }
    }

    /// Documentation root this engine serves.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of file indexes currently cached.
    pub fn cache_len(&self) -> Result<usize, EngineError> {
        Ok(self.lock_cache()?.len())
    }

    /// Number of distinct words in the candidate set.
    pub fn vocabulary_len(&self) -> Result<usize, EngineError> {
        Ok(self.read_vocabulary()?.len())
    }

    /// Ranks sections matching `query`, best first.
    ///
    /// Only files whose name matches `file_pattern` are scored. Equal scores
    /// keep file order, then in-file order.
    pub fn search(
        &self,
        query: &str,
        max_results: usize,
        file_pattern: &str,
    ) -> Result<Vec<SearchHit>, EngineError> {
        let query_tokens = tokenize(query);
        if query_tokens.is_empty() {
            tracing::debug!("Query '{}' has no searchable tokens", query);
            return Ok(Vec::new());
        }

        let files = self.files();
        self.sync_vocabulary(&files)?;

        if !self.read_vocabulary()?.contains_any(query_tokens.iter()) {
            tracing::debug!("Rejected query '{}': no token was ever indexed", query);
            return Ok(Vec::new());
        }

        let filter = NameFilter::new(file_pattern);
        let mut hits = Vec::new();

        for (path, fp) in files.iter().filter(|(path, _)| filter.matches(path)) {
            let Some(sections) = self.sections(path, *fp)? else {
                continue;
            };

            for section in sections.iter() {
                let relevance = score(section, &query_tokens, query);
                if relevance > 0.0 {
                    hits.push(SearchHit {
                        file: section.file.clone(),
                        title: section.title.clone(),
                        content: preview(&section.content),
                        score: relevance,
                        line: section.start_line,
                        level: section.level,
                    });
                }
            }
        }

        // Stable sort: ties keep production order
        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits.truncate(max_results);
        Ok(hits)
    }

    /// Reads a document by its path relative to the root.
    ///
    /// Bypasses the index entirely. Returns `Ok(None)` when the file does not
    /// exist or is not a regular file.
    pub fn get_file_content(&self, relative_path: &str) -> Result<Option<String>, EngineError> {
        let outside = || EngineError::OutsideRoot {
            path: PathBuf::from(relative_path),
        };

        let full_path = files::join_within(&self.root, relative_path).ok_or_else(outside)?;
        if !full_path.is_file() {
            return Ok(None);
        }

        // Symlinks may still point outside the root
        let canonical = canonicalize(&full_path)?;
        let canonical_root = canonicalize(&self.root)?;
        if !canonical.starts_with(&canonical_root) {
            return Err(outside());
        }

        Ok(Some(files::read_document(&canonical)))
    }

    /// Lists documents whose file name matches `pattern`, with stat metadata.
    ///
    /// At most `max_files` entries are inspected; files whose stat fails are
    /// skipped.
    pub fn list_files(&self, pattern: &str, max_files: usize) -> Vec<FileInfo> {
        let filter = NameFilter::new(pattern);
        files::enumerate(&self.root, &self.extensions)
            .into_iter()
            .filter(|path| filter.matches(path))
            .take(max_files)
            .filter_map(|path| FileInfo::from_path(&self.root, &path))
            .collect()
    }

    /// Indexed words starting with `partial_query`, shortest first.
    pub fn suggest(&self, partial_query: &str) -> Result<Vec<String>, EngineError> {
        let files = self.files();
        self.sync_vocabulary(&files)?;
        Ok(self.read_vocabulary()?.suggest(partial_query, MAX_SUGGESTIONS))
    }

    /// Every candidate document with its current fingerprint.
    fn files(&self) -> Vec<(PathBuf, Fingerprint)> {
        files::enumerate(&self.root, &self.extensions)
            .into_iter()
            .map(|path| {
                let fp = fingerprint(&path);
                (path, fp)
            })
            .collect()
    }

    /// Indexes every file version whose tokens have not reached the vocabulary.
    ///
    /// Without this a fresh engine, or one that has not yet seen a new file,
    /// would reject queries that do have matches.
    fn sync_vocabulary(&self, files: &[(PathBuf, Fingerprint)]) -> Result<(), EngineError> {
        let pending: Vec<&(PathBuf, Fingerprint)> = {
            let vocabulary = self.read_vocabulary()?;
            files
                .iter()
                .filter(|(_, fp)| !vocabulary.is_indexed(*fp))
                .collect()
        };

        if !pending.is_empty() {
            tracing::debug!("Indexing {} new or changed documents", pending.len());
        }
        for (path, fp) in pending {
            self.sections(path, *fp)?;
        }
        Ok(())
    }

    /// Returns the cached sections for a file version, building them on a miss.
    ///
    /// The cache lock is held across lookup, build, and insert so concurrent
    /// searches never rebuild the same version twice. Returns `None` for files
    /// with no readable content; those are not cached.
    fn sections(&self, path: &Path, fp: Fingerprint) -> Result<Option<Sections>, EngineError> {
        let mut cache = self.lock_cache()?;
        if let Some(sections) = cache.get(fp) {
            return Ok(Some(sections));
        }

        let content = files::read_document(path);
        if content.is_empty() {
            self.write_vocabulary()?.mark_indexed(fp);
            return Ok(None);
        }

        let relative = files::relative_path(&self.root, path);
        let name = files::file_name(path);
        let sections: Sections = {
            let mut vocabulary = self.write_vocabulary()?;
            let sections = extract_sections(&content, &relative, &name, |text| {
                vocabulary.index(text)
            });
            vocabulary.mark_indexed(fp);
            sections.into()
        };

        tracing::debug!(
            "Indexed {} ({} sections, key {})",
            relative,
            sections.len(),
            fp
        );
        cache.put(fp, Arc::clone(&sections));
        Ok(Some(sections))
    }

    fn lock_cache(&self) -> Result<MutexGuard<'_, IndexCache>, EngineError> {
        self.cache
            .lock()
            .map_err(|_| EngineError::Poisoned { what: "index cache" })
    }

    fn read_vocabulary(&self) -> Result<RwLockReadGuard<'_, Vocabulary>, EngineError> {
        self.vocabulary
            .read()
            .map_err(|_| EngineError::Poisoned { what: "word index" })
    }

    fn write_vocabulary(&self) -> Result<RwLockWriteGuard<'_, Vocabulary>, EngineError> {
        self.vocabulary
            .write()
            .map_err(|_| EngineError::Poisoned { what: "word index" })
    }
}

fn canonicalize(path: &Path) -> Result<PathBuf, EngineError> {
    std::fs::canonicalize(path).map_err(|source| EngineError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Truncates content to [`PREVIEW_CHARS`] characters, marking the cut with `...`.
fn preview(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}
