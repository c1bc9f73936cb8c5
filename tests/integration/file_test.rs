//! Integration tests for file CRUD, rename, move, and checkbox toggling.

use axum::http::StatusCode;

use crate::helpers;

#[tokio::test]
async fn test_create_file_appends_md_extension() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let response = app
        .request(
            "POST",
            "/api/file",
            Some(serde_json::json!({ "path": "/notes/idea", "content": "# Idea" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.get("path").unwrap().as_str().unwrap(),
        "/notes/idea.md"
    );
}

#[tokio::test]
async fn test_create_existing_file_conflicts() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;
    app.seed_file("a.md", "seeded");

    let response = app
        .request(
            "POST",
            "/api/file",
            Some(serde_json::json!({ "path": "/a.md", "content": "" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(
        response.body.get("error").unwrap().as_str().unwrap(),
        "CONFLICT"
    );
}

#[tokio::test]
async fn test_get_and_put_file() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;
    app.seed_file("todo.md", "- [ ] first");

    let response = app
        .request("GET", "/api/file?path=/todo.md", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.get("content").unwrap().as_str().unwrap(),
        "- [ ] first"
    );

    let response = app
        .request(
            "PUT",
            "/api/file",
            Some(serde_json::json!({ "path": "/todo.md", "content": "- [ ] rewritten" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/file?path=/todo.md", None, Some(&token))
        .await;
    assert_eq!(
        response.body.get("content").unwrap().as_str().unwrap(),
        "- [ ] rewritten"
    );
}

#[tokio::test]
async fn test_get_missing_file_is_not_found() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let response = app
        .request("GET", "/api/file?path=/nope.md", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rename_file() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;
    app.seed_file("notes/todo.md", "x");

    let response = app
        .request(
            "POST",
            "/api/file/rename",
            Some(serde_json::json!({
                "oldPath": "/notes/todo.md",
                "newPath": "/notes/shopping.md",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.get("newPath").unwrap().as_str().unwrap(),
        "/notes/shopping.md"
    );

    let response = app
        .request("GET", "/api/file?path=/notes/shopping.md", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_move_file() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;
    app.seed_file("src/x.md", "x");
    std::fs::create_dir_all(app.vault_dir.path().join("dst")).unwrap();

    let response = app
        .request(
            "POST",
            "/api/file/move",
            Some(serde_json::json!({
                "sourcePath": "/src/x.md",
                "destinationParentPath": "/dst",
                "newName": "x.md",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.get("path").unwrap().as_str().unwrap(),
        "/dst/x.md"
    );
}

#[tokio::test]
async fn test_move_folder_into_own_subtree_conflicts() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;
    std::fs::create_dir_all(app.vault_dir.path().join("a/b")).unwrap();

    let response = app
        .request(
            "POST",
            "/api/file/move",
            Some(serde_json::json!({
                "sourcePath": "/a",
                "destinationParentPath": "/a/b",
                "newName": "a",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_delete_folder_recursively() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;
    app.seed_file("gone/sub/x.md", "x");

    let response = app
        .request("DELETE", "/api/file?path=/gone", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/file?path=/gone/sub/x.md", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_toggle_checkbox_flips_the_stored_markdown() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;
    app.seed_file("todo.md", "# Todo\n- [ ] buy milk\n- [ ] call home\n");

    let response = app
        .request(
            "POST",
            "/api/file/toggle-checkbox",
            Some(serde_json::json!({
                "path": "/todo.md",
                "checkboxText": "buy milk",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/file?path=/todo.md", None, Some(&token))
        .await;
    let content = response.body.get("content").unwrap().as_str().unwrap();
    assert!(content.contains("- [x] buy milk"));
    assert!(content.contains("- [ ] call home"));
}
