//! Integration tests for tree listings, previews, and the file index.

use axum::http::StatusCode;

use crate::helpers;

#[tokio::test]
async fn test_tree_lists_folders_first() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;
    app.seed_file("b.md", "");
    app.seed_file("a.md", "");
    std::fs::create_dir_all(app.vault_dir.path().join("A")).unwrap();

    let response = app.request("GET", "/api/tree?path=/", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    let names: Vec<&str> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e.get("name").unwrap().as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["A", "a.md", "b.md"]);
}

#[tokio::test]
async fn test_tree_depth_two_nests_children() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;
    app.seed_file("top/inner/deep.md", "");

    let response = app
        .request("GET", "/api/tree?path=/top&depth=2", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let entries = response.body.as_array().unwrap();
    let inner = &entries[0];
    assert_eq!(inner.get("path").unwrap().as_str().unwrap(), "/top/inner");
    assert!(inner.get("isDir").unwrap().as_bool().unwrap());
    let children = inner.get("children").unwrap().as_array().unwrap();
    assert_eq!(
        children[0].get("path").unwrap().as_str().unwrap(),
        "/top/inner/deep.md"
    );
}

#[tokio::test]
async fn test_tree_missing_folder_is_empty_array() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let response = app
        .request("GET", "/api/tree?path=/nowhere", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_tree_escaping_path_is_forbidden() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let response = app
        .request("GET", "/api/tree?path=/../outside", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.body.get("error").unwrap().as_str().unwrap(),
        "INVALID_PATH"
    );
}

#[tokio::test]
async fn test_file_index_lists_markdown_recursively() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;
    app.seed_file("a.md", "");
    app.seed_file("sub/b.md", "");
    app.seed_file("sub/skip.txt", "");

    let response = app.request("GET", "/api/file-index", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    let paths: Vec<&str> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e.get("filePath").unwrap().as_str().unwrap())
        .collect();
    assert_eq!(paths, vec!["/a.md", "/sub/b.md"]);
}

#[tokio::test]
async fn test_preview_renders_html() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;
    app.seed_file("note.md", "# Title");

    let response = app
        .request("GET", "/api/preview?path=/note.md", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("markdown-body"));
    assert!(response.text.contains("<h1>Title</h1>"));
}

#[tokio::test]
async fn test_v2_preview_returns_raw_markdown() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;
    app.seed_file("note.md", "# Title");

    let response = app
        .request("GET", "/api/v2/preview?path=/note.md", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.get("markdown").unwrap().as_str().unwrap(),
        "# Title"
    );
}
