//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for startup and serving paths.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Faults raised by the search engine.
///
/// Tool handlers turn these into an `error` status; they never escape as panics.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The requested path resolves outside the documentation root.
    #[error("Path '{}' is outside the documentation root", path.display())]
    OutsideRoot { path: PathBuf },

    /// A shared index structure was poisoned by a panicking thread.
    #[error("{what} is corrupted (lock poisoned)")]
    Poisoned { what: &'static str },

    /// Reading or inspecting a file failed.
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
