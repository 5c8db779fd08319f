//! docsearch-mcp: full-text search over a directory of documentation files,
//! served to AI assistants over the Model Context Protocol.

pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod files;
pub mod fingerprint;
pub mod search;
pub mod server;
pub mod tools;
pub mod tracing;

pub use config::Config;
pub use engine::{SearchEngine, SearchHit};
pub use error::{EngineError, Result};
pub use server::DocSearchServer;
