use docsearch_mcp::{Config, DocSearchServer, SearchEngine};
use rmcp::{ServiceExt, transport::stdio};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr to avoid interfering with MCP protocol on stdout
    docsearch_mcp::tracing::init();

    let config = Config::load(std::env::args().nth(1))?;
    if !config.root.is_dir() {
        tracing::warn!(
            "Documentation root {} does not exist; searches will return nothing",
            config.root.display()
        );
    }

    tracing::info!(
        "Starting docsearch-mcp over {} (cache capacity {})",
        config.root.display(),
        config.cache_capacity
    );

    let engine = Arc::new(SearchEngine::with_config(&config));
    let service = DocSearchServer::new(engine)
        .serve(stdio())
        .await
        .inspect_err(|e| {
            tracing::error!("Error serving MCP server: {:?}", e);
        })?;

    service.waiting().await?;

    Ok(())
}
