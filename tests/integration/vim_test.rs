//! Integration tests for the persisted vim editor configuration.

use axum::http::StatusCode;

use crate::helpers;

#[tokio::test]
async fn test_get_creates_default_config() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let response = app.request("GET", "/api/vimconfig", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.get("keyMappings").unwrap().as_array().unwrap().is_empty());
    assert!(response.body.get("createdAt").is_some());

    // The default config is persisted inside the vault's app directory.
    assert!(
        app.vault_dir
            .path()
            .join(".notevault/config-vim.json")
            .exists()
    );
}

#[tokio::test]
async fn test_save_preserves_created_at_and_refreshes_updated_at() {
    let app = helpers::TestApp::new().await;
    let token = app.login().await;

    let first = app.request("GET", "/api/vimconfig", None, Some(&token)).await;
    let created_at = first.body.get("createdAt").unwrap().as_str().unwrap().to_string();

    let response = app
        .request(
            "POST",
            "/api/vimconfig",
            Some(serde_json::json!({
                "keyMappings": [{ "from": "jj", "to": "<Esc>" }],
                "exCommands": [],
                "unmappedKeys": [],
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.get("createdAt").unwrap().as_str().unwrap(),
        created_at
    );
    assert_eq!(
        response
            .body
            .get("keyMappings")
            .unwrap()
            .as_array()
            .unwrap()
            .len(),
        1
    );

    let reread = app.request("GET", "/api/vimconfig", None, Some(&token)).await;
    assert_eq!(
        reread
            .body
            .get("keyMappings")
            .unwrap()
            .as_array()
            .unwrap()
            .len(),
        1
    );
}
