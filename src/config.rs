//! Server configuration.
//!
//! Settings are layered, later sources overriding earlier ones:
//! built-in defaults, a TOML file, the `DOCSEARCH_ROOT` environment variable,
//! and finally the first command-line argument.

use crate::cache::DEFAULT_CAPACITY;
use crate::error::Result;
use crate::files::DEFAULT_EXTENSIONS;
use anyhow::Context;
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "DOCSEARCH_CONFIG";
/// Environment variable overriding the documentation root.
pub const ROOT_ENV: &str = "DOCSEARCH_ROOT";
/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "docsearch.toml";

/// Search engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding the documents to search
    pub root: PathBuf,
    /// Maximum number of per-file indexes kept in memory
    pub cache_capacity: usize,
    /// File extensions (with leading dot) considered documents
    pub extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("docs"),
            cache_capacity: DEFAULT_CAPACITY,
            extensions: DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Config {
    /// Default settings over the given root.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Parses settings from TOML text; missing keys take their defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid configuration")
    }

    /// Loads settings from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("In config file {}", path.display()))
    }

    /// Resolves the effective configuration for the server process.
    ///
    /// `root_arg` is the first positional command-line argument, if any.
    pub fn load(root_arg: Option<String>) -> Result<Self> {
        let mut config = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };

        if let Ok(root) = std::env::var(ROOT_ENV) {
            config.root = PathBuf::from(root);
        }
        if let Some(root) = root_arg {
            config.root = PathBuf::from(root);
        }

        config.root = PathBuf::from(expand_tilde(&config.root.to_string_lossy()).as_ref());
        if config.cache_capacity == 0 {
            tracing::warn!("cache_capacity of 0 is not usable, using 1");
            config.cache_capacity = 1;
        }

        Ok(config)
    }
}

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}
