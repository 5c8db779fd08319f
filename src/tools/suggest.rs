use super::{Status, run_blocking};
use crate::engine::SearchEngine;
use rmcp::schemars;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SuggestRequest {
    /// Beginning of a search term
    pub partial_query: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<String>,
    pub based_on: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Complete a partial term from the indexed vocabulary.
pub async fn handle_suggest(engine: &Arc<SearchEngine>, request: SuggestRequest) -> SuggestResponse {
    let based_on = request.partial_query;
    let outcome = {
        let partial = based_on.clone();
        run_blocking(engine, move |engine| engine.suggest(&partial)).await
    };

    match outcome {
        Ok(suggestions) => SuggestResponse {
            suggestions,
            based_on,
            status: Status::Success,
            error: None,
        },
        Err(e) => SuggestResponse {
            suggestions: Vec::new(),
            based_on,
            status: Status::Error,
            error: Some(e),
        },
    }
}
