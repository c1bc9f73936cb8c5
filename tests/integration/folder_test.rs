//! Integration tests for folder listing and creation.

use axum::http::StatusCode;

use crate::helpers;

#[tokio::test]
async fn test_folder_listing_carries_type_and_extension() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;
    app.seed_file("docs/readme.md", "");
    std::fs::create_dir_all(app.vault_dir.path().join("docs/sub")).unwrap();

    let response = app
        .request("GET", "/api/folder?path=/docs", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.get("path").unwrap().as_str().unwrap(), "/docs");

    let items = response.body.get("items").unwrap().as_array().unwrap();
    let sub = &items[0];
    assert_eq!(sub.get("type").unwrap().as_str().unwrap(), "folder");
    assert!(sub.get("extension").unwrap().is_null());

    let readme = &items[1];
    assert_eq!(readme.get("type").unwrap().as_str().unwrap(), "file");
    assert_eq!(readme.get("extension").unwrap().as_str().unwrap(), ".md");
}

#[tokio::test]
async fn test_missing_folder_is_not_found() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let response = app
        .request("GET", "/api/folder?path=/nowhere", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_folder_then_conflict() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let response = app
        .request(
            "POST",
            "/api/folder",
            Some(serde_json::json!({ "path": "/archive" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "POST",
            "/api/folder",
            Some(serde_json::json!({ "path": "/archive" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}
