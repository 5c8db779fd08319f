//! Ranked full-text search over the documentation root.

use super::{Status, run_blocking};
use crate::engine::{SearchEngine, SearchHit};
use rmcp::schemars;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    /// Search terms or phrase to find in the documentation
    pub query: String,
    /// Maximum number of results to return (default: 10)
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// File name pattern to restrict the search, e.g. "*.md" or "*azure*" (default: "*")
    #[serde(default = "default_file_pattern")]
    pub file_pattern: String,
}

fn default_max_results() -> usize {
    10
}

pub(crate) fn default_file_pattern() -> String {
    "*".to_string()
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
    pub total_found: usize,
    /// Seconds spent, rounded to milliseconds
    pub search_time: f64,
    pub query_used: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Execute a search, timing it end to end.
pub async fn handle_search(engine: &Arc<SearchEngine>, request: SearchRequest) -> SearchResponse {
    let start = Instant::now();
    let SearchRequest {
        query,
        max_results,
        file_pattern,
    } = request;

    let outcome = {
        let query = query.clone();
        run_blocking(engine, move |engine| {
            engine.search(&query, max_results, &file_pattern)
        })
        .await
    };
    let elapsed = start.elapsed();
    let search_time = (elapsed.as_secs_f64() * 1000.0).round() / 1000.0;

    match outcome {
        Ok(results) => {
            tracing::info!(
                "Search '{}' returned {} results in {:?}",
                query,
                results.len(),
                elapsed
            );
            SearchResponse {
                total_found: results.len(),
                results,
                search_time,
                query_used: query,
                status: Status::Success,
                error: None,
            }
        }
        Err(e) => {
            tracing::warn!("Search '{}' failed: {}", query, e);
            SearchResponse {
                results: Vec::new(),
                total_found: 0,
                search_time,
                query_used: query,
                status: Status::Error,
                error: Some(e),
            }
        }
    }
}
