//! Bounded cache of per-file section indexes.
//!
//! Entries are keyed by [`Fingerprint`], so an edited file simply misses and is
//! rebuilt. Stale entries are never purged explicitly; they age out through LRU
//! eviction once the capacity is reached.

use crate::fingerprint::Fingerprint;
use crate::search::Section;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Default number of file indexes kept in memory.
pub const DEFAULT_CAPACITY: usize = 50;

/// Sections of one file version, shared with in-flight searches.
pub type Sections = Arc<[Section]>;

/// LRU map from file fingerprint to that file's sections.
#[derive(Debug)]
pub struct IndexCache {
    entries: LruCache<Fingerprint, Sections>,
}

impl IndexCache {
    /// Create a cache holding at most `capacity` files. Zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Look up a file version, marking it most recently used.
    pub fn get(&mut self, fingerprint: Fingerprint) -> Option<Sections> {
        self.entries.get(&fingerprint).cloned()
    }

    /// Store a file version, evicting the least recently used entry when full.
    pub fn put(&mut self, fingerprint: Fingerprint, sections: Sections) {
        if let Some((evicted, _)) = self.entries.push(fingerprint, sections)
            && evicted != fingerprint
        {
            tracing::debug!("Evicted index {} from cache", evicted);
        }
    }

    pub fn contains(&self, fingerprint: Fingerprint) -> bool {
        self.entries.contains(&fingerprint)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }
}

impl Default for IndexCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
