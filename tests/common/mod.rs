//! Shared test fixtures and utilities for integration tests.
//!
//! Each test gets a fresh temporary documentation root and its own
//! [`SearchEngine`], so the index cache and word set start empty and tests can
//! run in parallel without interference.

use docsearch_mcp::SearchEngine;
use rstest::fixture;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

/// A temporary documentation root that is removed when dropped.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempDocs {
    temp: TempDir,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempDocs {
    /// Creates a new empty documentation root.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        Self { temp }
    }

    /// Returns the root path.
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Creates a file with the given content, creating parent directories.
    ///
    /// # Panics
    /// Panics if file creation fails.
    pub fn create_file(&self, path: &str, content: &str) {
        let full_path = self.temp.path().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Failed to create parent directory for '{}': {}", path, e)
            });
        }
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
    }

    /// Deletes a file.
    pub fn remove_file(&self, path: &str) {
        std::fs::remove_file(self.temp.path().join(path))
            .unwrap_or_else(|e| panic!("Failed to remove file '{}': {}", path, e));
    }
}

impl Default for TempDocs {
    fn default() -> Self {
        Self::new()
    }
}

/// A documentation root paired with an engine serving it.
#[allow(dead_code)] // Fields used across different integration test crates
pub struct DocsWorkspace {
    pub docs: TempDocs,
    pub engine: Arc<SearchEngine>,
}

#[allow(dead_code)]
impl DocsWorkspace {
    /// Creates an empty root and an engine over it.
    pub fn empty() -> Self {
        let docs = TempDocs::new();
        let engine = Arc::new(SearchEngine::new(docs.path()));
        Self { docs, engine }
    }

    /// Creates a root populated with a small networking wiki.
    pub fn with_wiki() -> Self {
        let workspace = Self::empty();
        let docs = &workspace.docs;
        docs.create_file(
            "overview.md",
            "# Azure Overview\nLoad Balancer distributes traffic",
        );
        docs.create_file(
            "networking/vnet.md",
            "Virtual networks in Azure.\n\
             # Virtual Network\n\
             A VNet is an isolated network.\n\
             ## Peering\n\
             VNet peering connects two virtual networks.\n\
             ### Gateway Transit\n\
             Peered networks can share a VPN gateway.",
        );
        docs.create_file(
            "networking/dns.txt",
            "Private DNS zones resolve names inside a virtual network.",
        );
        docs.create_file("notes/terraform.rst", "Use the azurerm provider for Azure.");
        docs.create_file("assets/diagram.svg", "<svg>Load Balancer</svg>");
        workspace
    }
}

/// Empty documentation root with a fresh engine.
#[fixture]
pub fn empty_docs() -> DocsWorkspace {
    DocsWorkspace::empty()
}

/// Small networking wiki with a fresh engine.
///
/// This is the **recommended fixture** for most tests.
#[fixture]
pub fn wiki() -> DocsWorkspace {
    DocsWorkspace::with_wiki()
}
