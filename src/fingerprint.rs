//! Cache keys for document versions.
//!
//! A fingerprint hashes a file's path together with its modification time and
//! size. Any edit that touches either invalidates the cached index for that file;
//! an edit that preserves both is not detected.

use std::fmt;
use std::path::Path;
use std::time::UNIX_EPOCH;
use xxhash_rust::xxh3::xxh3_64;

/// Opaque 64-bit key identifying one version of one file.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Fingerprint(u64);

impl Fingerprint {
    /// Returns the raw hash value.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the fingerprint as a lowercase hexadecimal string.
    pub fn as_hex(self) -> String {
        format!("{:016x}", self.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_hex())
    }
}

/// Computes the fingerprint of the file at `path`.
///
/// Never fails. When the file cannot be stat'ed the path string alone is hashed,
/// so a vanished or unreadable file still gets a stable key.
pub fn fingerprint(path: &Path) -> Fingerprint {
    let shown = path.to_string_lossy();

    match std::fs::metadata(path) {
        Ok(meta) => {
            let mtime = meta
                .modified()
                .ok()
                .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
                .map_or(0, |d| d.as_nanos());
            let key = format!("{}:{}:{}", shown, mtime, meta.len());
            Fingerprint(xxh3_64(key.as_bytes()))
        }
        Err(e) => {
            tracing::debug!("stat failed for {}, hashing path only: {}", shown, e);
            Fingerprint(xxh3_64(shown.as_bytes()))
        }
    }
}
