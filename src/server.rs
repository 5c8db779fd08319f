//! MCP server exposing the search engine as tools.

use crate::engine::SearchEngine;
use crate::tools::{
    GetFileRequest, ListFilesRequest, SearchRequest, SuggestRequest, handle_get_file,
    handle_list_files, handle_search, handle_suggest,
};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
};
use serde::Serialize;
use std::sync::Arc;

/// MCP Server for documentation search
#[derive(Clone)]
pub struct DocSearchServer {
    /// Shared search engine (index cache and word set)
    engine: Arc<SearchEngine>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for DocSearchServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocSearchServer")
            .field("engine", &self.engine)
            .finish()
    }
}

#[tool_router]
impl DocSearchServer {
    /// Create a server around an existing engine.
    pub fn new(engine: Arc<SearchEngine>) -> Self {
        Self {
            engine,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Search the documentation for relevant content. Matches are whole sections between markdown headers, ranked by phrase and word overlap with title matches weighted highest. Returns file, title, content preview, score and line for each match."
    )]
    async fn search_docs(
        &self,
        Parameters(request): Parameters<SearchRequest>,
    ) -> std::result::Result<String, String> {
        to_json(&handle_search(&self.engine, request).await)
    }

    #[tool(
        description = "Get the full content of a documentation file by its path relative to the documentation root."
    )]
    async fn get_doc_file(
        &self,
        Parameters(request): Parameters<GetFileRequest>,
    ) -> std::result::Result<String, String> {
        to_json(&handle_get_file(&self.engine, request).await)
    }

    #[tool(
        description = "List documentation files with path, name, size, modification time and extension, optionally filtered by a file name pattern such as '*.md'."
    )]
    async fn list_doc_files(
        &self,
        Parameters(request): Parameters<ListFilesRequest>,
    ) -> std::result::Result<String, String> {
        to_json(&handle_list_files(&self.engine, request).await)
    }

    #[tool(
        description = "Suggest complete search terms that start with a partial query, drawn from words found in the documentation. Shorter terms come first."
    )]
    async fn doc_search_suggestions(
        &self,
        Parameters(request): Parameters<SuggestRequest>,
    ) -> std::result::Result<String, String> {
        to_json(&handle_suggest(&self.engine, request).await)
    }
}

#[tool_handler]
impl ServerHandler for DocSearchServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.protocol_version = ProtocolVersion::V_2024_11_05;
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.server_info = Implementation::from_build_env();
        info.instructions = Some(format!(
            "docsearch-mcp: full-text search over the documentation in {}. \
             Use search_docs to find sections, get_doc_file to read a whole file, \
             list_doc_files to browse, and doc_search_suggestions to complete terms.",
            self.engine.root().display()
        ));
        info
    }
}

fn to_json<T: Serialize>(response: &T) -> std::result::Result<String, String> {
    serde_json::to_string_pretty(response).map_err(|e| format!("Failed to encode response: {}", e))
}
