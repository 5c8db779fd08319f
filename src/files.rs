//! Document discovery, decoding, and stat metadata.

use glob::Pattern;
use ignore::WalkBuilder;
use serde::Serialize;
use std::path::{Component, Path, PathBuf};
use std::time::UNIX_EPOCH;

/// Extensions indexed when none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".md", ".txt", ".rst", ".html", ".xml"];

/// Lists every file under `root` whose extension is in `extensions`.
///
/// Extensions are given with their leading dot (`.md`) and compared
/// case-sensitively. The result is sorted by path. A missing root yields an
/// empty list; unreadable directory entries are skipped.
///
/// Symlinks are followed, but a file whose resolved path lies outside the root
/// is skipped. Listed paths keep the link's own location under the root.
pub fn enumerate(root: &Path, extensions: &[String]) -> Vec<PathBuf> {
    if !root.is_dir() {
        return Vec::new();
    }
    let canonical_root = std::fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());

    let mut files: Vec<PathBuf> = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(true)
        .build()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!("Skipping unreadable entry under {}: {}", root.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .map(ignore::DirEntry::into_path)
        .filter(|path| has_extension(path, extensions))
        // Linked directories may point outside the root as well
        .filter(|path| resolves_within(&canonical_root, path))
        .collect();

    files.sort();
    files
}

fn resolves_within(canonical_root: &Path, path: &Path) -> bool {
    match std::fs::canonicalize(path) {
        Ok(target) if target.starts_with(canonical_root) => true,
        Ok(target) => {
            tracing::debug!(
                "Skipping {}: links outside the root to {}",
                path.display(),
                target.display()
            );
            false
        }
        Err(e) => {
            tracing::debug!("Skipping unresolvable path {}: {}", path.display(), e);
            false
        }
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .any(|wanted| wanted.strip_prefix('.').unwrap_or(wanted) == ext)
}

/// File-name filter built from a shell-style glob such as `*.md` or `*azure*`.
///
/// `*` matches everything. A pattern that fails to parse as a glob is compared
/// literally against the file name.
#[derive(Debug, Clone)]
pub enum NameFilter {
    Any,
    Glob(Pattern),
    Literal(String),
}

impl NameFilter {
    pub fn new(pattern: &str) -> Self {
        if pattern == "*" {
            return Self::Any;
        }
        match Pattern::new(pattern) {
            Ok(glob) => Self::Glob(glob),
            Err(e) => {
                tracing::debug!("Invalid glob '{}', matching literally: {}", pattern, e);
                Self::Literal(pattern.to_string())
            }
        }
    }

    /// Checks the final path component against the filter.
    pub fn matches(&self, path: &Path) -> bool {
        let name = file_name(path);
        match self {
            Self::Any => true,
            Self::Glob(glob) => glob.matches(&name),
            Self::Literal(literal) => name == *literal,
        }
    }
}

/// Reads a document as text.
///
/// Invalid UTF-8 is decoded as Latin-1, which accepts every byte sequence.
/// A file that cannot be read at all yields an empty string.
pub fn read_document(path: &Path) -> String {
    match std::fs::read(path) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!("{} is not valid UTF-8, decoding as Latin-1", path.display());
                e.into_bytes().iter().map(|&b| char::from(b)).collect()
            }
        },
        Err(e) => {
            tracing::debug!("Failed to read {}: {}", path.display(), e);
            String::new()
        }
    }
}

/// Path of `path` relative to `root`, always with `/` separators.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Final path component as a string.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Joins a caller-supplied relative path onto `root` without leaving it.
///
/// Returns `None` for absolute paths and for `..` components that climb above
/// the root. Symlinks are not resolved here.
pub fn join_within(root: &Path, relative: &str) -> Option<PathBuf> {
    let mut joined = root.to_path_buf();
    let mut depth = 0usize;

    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => {
                joined.push(part);
                depth += 1;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                depth = depth.checked_sub(1)?;
                joined.pop();
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    Some(joined)
}

/// Stat metadata reported by file listings.
#[derive(Debug, Clone, Serialize)]
pub struct FileInfo {
    /// Path relative to the documentation root
    pub path: String,
    /// File name
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Modification time as seconds since the Unix epoch
    pub modified: f64,
    /// Extension including its leading dot, or empty
    pub extension: String,
}

impl FileInfo {
    /// Stats `path`. Returns `None` if the file cannot be inspected.
    pub fn from_path(root: &Path, path: &Path) -> Option<Self> {
        let meta = match std::fs::metadata(path) {
            Ok(meta) => meta,
            Err(e) => {
                tracing::debug!("Skipping {} in listing: {}", path.display(), e);
                return None;
            }
        };

        let modified = meta
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map_or(0.0, |d| d.as_secs_f64());

        let extension = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();

        Some(Self {
            path: relative_path(root, path),
            name: file_name(path),
            size: meta.len(),
            modified,
            extension,
        })
    }
}
