//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use notevault_api::state::AppState;
use notevault_core::config::AppConfig;
use notevault_core::config::auth::AuthConfig;
use notevault_core::config::vault::VaultConfig;

pub const TEST_USERNAME: &str = "admin";
pub const TEST_PASSWORD: &str = "password123";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Temporary vault root; deleted when the app is dropped
    pub vault_dir: TempDir,
}

impl TestApp {
    /// Create a new test application over an empty temporary vault
    pub async fn new() -> Self {
        let vault_dir = tempfile::tempdir().expect("Failed to create vault dir");

        let config = AppConfig {
            server: Default::default(),
            auth: AuthConfig {
                jwt_secret: "integration-test-secret".to_string(),
                token_ttl_hours: 1,
                username: TEST_USERNAME.to_string(),
                password: TEST_PASSWORD.to_string(),
            },
            vault: VaultConfig {
                root: vault_dir.path().to_string_lossy().to_string(),
                ..Default::default()
            },
            logging: Default::default(),
        };

        let vault = Arc::new(
            notevault_vault::store::FsVault::new(&config.vault.root)
                .await
                .expect("Failed to open vault"),
        );
        let file_index = Arc::new(notevault_vault::index::FileIndex::new(
            (*vault).clone(),
            config.vault.index_ttl_seconds,
        ));

        let credentials = Arc::new(
            notevault_auth::credentials::CredentialVerifier::new(&config.auth)
                .expect("Failed to build credential verifier"),
        );
        let jwt_encoder = Arc::new(notevault_auth::jwt::encoder::JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(notevault_auth::jwt::decoder::JwtDecoder::new(&config.auth));

        let app_state = AppState {
            config: Arc::new(config),
            vault,
            file_index,
            jwt_encoder,
            jwt_decoder,
            credentials,
        };

        let router = notevault_api::router::build_router(app_state);

        Self { router, vault_dir }
    }

    /// Seed a file directly on disk, bypassing the API
    pub fn seed_file(&self, relative_path: &str, content: &str) {
        let full = self.vault_dir.path().join(relative_path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create seed dirs");
        }
        std::fs::write(full, content).expect("Failed to seed file");
    }

    /// Login with the shared credential and return the JWT
    pub async fn login(&self) -> String {
        let response = self
            .request(
                "POST",
                "/api/login",
                Some(serde_json::json!({
                    "username": TEST_USERNAME,
                    "password": TEST_PASSWORD,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in login response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).to_string();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body, text }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (`Null` when the body is not JSON)
    pub body: Value,
    /// Raw body text, for non-JSON endpoints
    pub text: String,
}
