//! Request and response records for the four search tools.
//!
//! Every handler returns a well-formed response: engine failures are reported
//! through `status` and `error` instead of propagating.

pub mod get_file;
pub mod list_files;
pub mod search;
pub mod suggest;

pub use get_file::*;
pub use list_files::*;
pub use search::*;
pub use suggest::*;

use crate::engine::SearchEngine;
use crate::error::EngineError;
use serde::Serialize;
use std::sync::Arc;

/// Outcome reported alongside every tool response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Success,
    NotFound,
    Error,
}

/// Runs blocking engine work off the async runtime.
///
/// A panicking task is reported as an error message like any engine fault.
async fn run_blocking<T, F>(engine: &Arc<SearchEngine>, work: F) -> Result<T, String>
where
    T: Send + 'static,
    F: FnOnce(&SearchEngine) -> Result<T, EngineError> + Send + 'static,
{
    let engine = Arc::clone(engine);
    match tokio::task::spawn_blocking(move || work(&engine)).await {
        Ok(result) => result.map_err(|e| e.to_string()),
        Err(e) => Err(format!("Search task failed: {}", e)),
    }
}
