use super::search::default_file_pattern;
use super::{Status, run_blocking};
use crate::engine::SearchEngine;
use crate::files::FileInfo;
use rmcp::schemars;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListFilesRequest {
    /// File name pattern to match, e.g. "*.md" or "*azure*" (default: "*")
    #[serde(default = "default_file_pattern")]
    pub pattern: String,
    /// Maximum number of files to return (default: 100)
    #[serde(default = "default_max_files")]
    pub max_files: usize,
}

fn default_max_files() -> usize {
    100
}

#[derive(Debug, Clone, Serialize)]
pub struct ListFilesResponse {
    pub files: Vec<FileInfo>,
    pub total_files: usize,
    pub pattern_used: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// List documents with their stat metadata.
pub async fn handle_list_files(
    engine: &Arc<SearchEngine>,
    request: ListFilesRequest,
) -> ListFilesResponse {
    let ListFilesRequest { pattern, max_files } = request;
    let outcome = {
        let pattern = pattern.clone();
        run_blocking(engine, move |engine| Ok(engine.list_files(&pattern, max_files))).await
    };

    match outcome {
        Ok(files) => ListFilesResponse {
            total_files: files.len(),
            files,
            pattern_used: pattern,
            status: Status::Success,
            error: None,
        },
        Err(e) => ListFilesResponse {
            files: Vec::new(),
            total_files: 0,
            pattern_used: pattern,
            status: Status::Error,
            error: Some(e),
        },
    }
}
