mod common;

use assert2::{check, let_assert};
use common::{DocsWorkspace, empty_docs, wiki};
use docsearch_mcp::tools::{
    GetFileRequest, ListFilesRequest, Status, SuggestRequest, handle_get_file, handle_list_files,
    handle_suggest,
};
use rstest::rstest;

fn get(path: &str) -> GetFileRequest {
    GetFileRequest {
        file_path: path.to_string(),
    }
}

fn list(pattern: &str, max_files: usize) -> ListFilesRequest {
    ListFilesRequest {
        pattern: pattern.to_string(),
        max_files,
    }
}

fn suggest(partial: &str) -> SuggestRequest {
    SuggestRequest {
        partial_query: partial.to_string(),
    }
}

// --- get_doc_file ---

#[rstest]
#[tokio::test]
async fn get_file_returns_content(wiki: DocsWorkspace) {
    let response = handle_get_file(&wiki.engine, get("overview.md")).await;

    check!(response.status == Status::Success);
    check!(response.exists);
    check!(response.content == "# Azure Overview\nLoad Balancer distributes traffic");
    check!(response.size == response.content.len());
    check!(response.file_path == "overview.md");
}

#[rstest]
#[tokio::test]
async fn get_file_nested_path(wiki: DocsWorkspace) {
    let response = handle_get_file(&wiki.engine, get("networking/dns.txt")).await;
    check!(response.exists);
    check!(response.content.starts_with("Private DNS"));
}

#[rstest]
#[case("missing.md")]
#[case("networking")]
#[tokio::test]
async fn get_file_not_found(wiki: DocsWorkspace, #[case] path: &str) {
    let response = handle_get_file(&wiki.engine, get(path)).await;

    check!(response.status == Status::NotFound);
    check!(!response.exists);
    check!(response.size == 0);
    check!(response.content.is_empty());
    check!(response.error.is_none());
}

#[rstest]
#[case("../outside.md")]
#[case("/etc/hostname")]
#[tokio::test]
async fn get_file_outside_root(wiki: DocsWorkspace, #[case] path: &str) {
    let response = handle_get_file(&wiki.engine, get(path)).await;

    check!(response.status == Status::Error);
    check!(!response.exists);
    let_assert!(Some(error) = response.error);
    check!(error.contains("outside the documentation root"));
}

#[cfg(unix)]
#[rstest]
#[tokio::test]
async fn get_file_symlink_escape(wiki: DocsWorkspace) {
    let outside = tempfile::TempDir::new().unwrap();
    let secret = outside.path().join("secret.md");
    std::fs::write(&secret, "secret").unwrap();
    std::os::unix::fs::symlink(&secret, wiki.docs.path().join("link.md")).unwrap();

    let response = handle_get_file(&wiki.engine, get("link.md")).await;
    check!(response.status == Status::Error);
    check!(response.content.is_empty());
}

#[rstest]
#[tokio::test]
async fn get_file_does_not_index(wiki: DocsWorkspace) {
    let _ = handle_get_file(&wiki.engine, get("overview.md")).await;
    check!(wiki.engine.cache_len().unwrap() == 0);
    check!(wiki.engine.vocabulary_len().unwrap() == 0);
}

// --- list_doc_files ---

#[rstest]
#[tokio::test]
async fn list_files_all(wiki: DocsWorkspace) {
    let response = handle_list_files(&wiki.engine, list("*", 100)).await;

    check!(response.status == Status::Success);
    check!(response.pattern_used == "*");
    let paths: Vec<&str> = response.files.iter().map(|f| f.path.as_str()).collect();
    check!(
        paths
            == vec![
                "networking/dns.txt",
                "networking/vnet.md",
                "notes/terraform.rst",
                "overview.md",
            ]
    );
    check!(response.total_files == 4);
}

#[rstest]
#[tokio::test]
async fn list_files_by_extension(empty_docs: DocsWorkspace) {
    empty_docs.docs.create_file("a.md", "alpha");
    empty_docs.docs.create_file("b.md", "beta");
    empty_docs.docs.create_file("c.txt", "gamma");

    let response = handle_list_files(&empty_docs.engine, list("*.md", 100)).await;

    check!(response.total_files == 2);
    check!(response.files.iter().all(|f| f.size > 0));
    check!(response.files.iter().all(|f| f.extension == ".md"));
    check!(response.files[0].name == "a.md");
}

#[rstest]
#[tokio::test]
async fn list_files_limit(wiki: DocsWorkspace) {
    let response = handle_list_files(&wiki.engine, list("*", 2)).await;
    check!(response.total_files == 2);
}

#[rstest]
#[tokio::test]
async fn list_files_empty_root(empty_docs: DocsWorkspace) {
    let response = handle_list_files(&empty_docs.engine, list("*", 100)).await;
    check!(response.status == Status::Success);
    check!(response.files.is_empty());
}

#[test]
fn list_files_request_defaults() {
    let request: ListFilesRequest = serde_json::from_str("{}").unwrap();
    check!(request.pattern == "*");
    check!(request.max_files == 100);
}

// --- doc_search_suggestions ---

#[rstest]
#[tokio::test]
async fn suggest_completes_terms(wiki: DocsWorkspace) {
    let response = handle_suggest(&wiki.engine, suggest("azur")).await;

    check!(response.status == Status::Success);
    check!(response.based_on == "azur");
    check!(response.suggestions == vec!["azure", "azurerm"]);
}

#[rstest]
#[tokio::test]
async fn suggest_case_insensitive(wiki: DocsWorkspace) {
    let response = handle_suggest(&wiki.engine, suggest("PEER")).await;
    check!(response.suggestions == vec!["peered", "peering"]);
}

#[rstest]
#[tokio::test]
async fn suggest_unknown_prefix(wiki: DocsWorkspace) {
    let response = handle_suggest(&wiki.engine, suggest("qqq")).await;
    check!(response.status == Status::Success);
    check!(response.suggestions.is_empty());
}

#[rstest]
#[tokio::test]
async fn suggest_caps_results(wiki: DocsWorkspace) {
    let response = handle_suggest(&wiki.engine, suggest("")).await;
    check!(response.suggestions.len() == 10);
    check!(
        response
            .suggestions
            .windows(2)
            .all(|w| w[0].chars().count() <= w[1].chars().count())
    );
}
