use super::{Status, run_blocking};
use crate::engine::SearchEngine;
use rmcp::schemars;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetFileRequest {
    /// Path of the file relative to the documentation root
    pub file_path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GetFileResponse {
    pub content: String,
    pub file_path: String,
    pub exists: bool,
    /// Size of the content in UTF-8 bytes
    pub size: usize,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GetFileResponse {
    fn missing(file_path: String, status: Status, error: Option<String>) -> Self {
        Self {
            content: String::new(),
            file_path,
            exists: false,
            size: 0,
            status,
            error,
        }
    }
}

/// Read one document in full, bypassing the index.
pub async fn handle_get_file(engine: &Arc<SearchEngine>, request: GetFileRequest) -> GetFileResponse {
    let file_path = request.file_path;
    let outcome = {
        let file_path = file_path.clone();
        run_blocking(engine, move |engine| engine.get_file_content(&file_path)).await
    };

    match outcome {
        Ok(Some(content)) => GetFileResponse {
            size: content.len(),
            content,
            file_path,
            exists: true,
            status: Status::Success,
            error: None,
        },
        Ok(None) => GetFileResponse::missing(file_path, Status::NotFound, None),
        Err(e) => {
            tracing::warn!("Reading '{}' failed: {}", file_path, e);
            GetFileResponse::missing(file_path, Status::Error, Some(e))
        }
    }
}
