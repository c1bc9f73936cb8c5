//! End-to-end tests of the HTTP API client against a live server on an
//! ephemeral port.

use notevault_client::ApiClient;
use notevault_core::error::ErrorKind;
use notevault_core::traits::tree::TreeProvider;

use crate::helpers;

/// Serve the test app on an ephemeral port, returning the client base
/// URL. The `TestApp` must stay alive for the duration of the test so
/// the vault directory is not deleted under the server.
async fn serve(app: &helpers::TestApp) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("No local addr");
    let router = app.router.clone();
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Server failed");
    });
    format!("http://{}/api", addr)
}

#[tokio::test]
async fn test_login_then_list_and_read() {
    let app = helpers::TestApp::new().await;
    app.seed_file("notes/todo.md", "- [ ] first");
    let base_url = serve(&app).await;

    let client = ApiClient::new(base_url);
    assert!(!client.is_authenticated());
    client
        .login(helpers::TEST_USERNAME, helpers::TEST_PASSWORD)
        .await
        .unwrap();
    assert!(client.is_authenticated());

    let entries = client.list_folder("/", 1).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].path, "/notes");
    assert!(entries[0].is_dir);

    let content = client.read_file("/notes/todo.md").await.unwrap();
    assert_eq!(content, "- [ ] first");
}

#[tokio::test]
async fn test_requests_without_login_are_unauthorized() {
    let app = helpers::TestApp::new().await;
    let base_url = serve(&app).await;

    let client = ApiClient::new(base_url);
    let err = client.list_folder("/", 1).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unauthorized);
}

#[tokio::test]
async fn test_mutations_round_trip_over_http() {
    let app = helpers::TestApp::new().await;
    let base_url = serve(&app).await;

    let client = ApiClient::new(base_url);
    client
        .login(helpers::TEST_USERNAME, helpers::TEST_PASSWORD)
        .await
        .unwrap();

    let path = client.create_file("/idea", "# Idea").await.unwrap();
    assert_eq!(path, "/idea.md");

    client.create_folder("/archive").await.unwrap();
    client.rename_entry("/idea.md", "/plan.md").await.unwrap();
    client.move_entry("/plan.md", "/archive", "plan.md").await.unwrap();

    let content = client.read_file("/archive/plan.md").await.unwrap();
    assert_eq!(content, "# Idea");

    client.delete_entry("/archive").await.unwrap();
    let err = client.read_file("/archive/plan.md").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_error_kinds_map_from_statuses() {
    let app = helpers::TestApp::new().await;
    app.seed_file("taken.md", "");
    let base_url = serve(&app).await;

    let client = ApiClient::new(base_url);
    client
        .login(helpers::TEST_USERNAME, helpers::TEST_PASSWORD)
        .await
        .unwrap();

    let err = client.create_file("/taken.md", "").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);

    let err = client.read_file("/missing.md").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    let err = client.list_folder("/../outside", 1).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidPath);
}

#[tokio::test]
async fn test_preview_over_http() {
    let app = helpers::TestApp::new().await;
    app.seed_file("note.md", "# Title");
    let base_url = serve(&app).await;

    let client = ApiClient::new(base_url);
    client
        .login(helpers::TEST_USERNAME, helpers::TEST_PASSWORD)
        .await
        .unwrap();

    let html = client.render_preview("/note.md").await.unwrap();
    assert!(html.contains("<h1>Title</h1>"));

    let markdown = client.read_markdown("/note.md").await.unwrap();
    assert_eq!(markdown, "# Title");
}
