//! HTTP client for the NoteVault API.
//!
//! Implements [`TreeProvider`] over the server's REST endpoints, so the
//! tree model runs unchanged against a remote vault.

use std::sync::RwLock;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use notevault_core::error::{AppError, ErrorKind};
use notevault_core::result::AppResult;
use notevault_core::traits::tree::{TreeEntry, TreeProvider};

#[derive(Debug, Deserialize)]
struct TokenBody {
    token: String,
}

#[derive(Debug, Deserialize)]
struct ContentBody {
    content: String,
}

#[derive(Debug, Deserialize)]
struct MarkdownBody {
    markdown: String,
}

#[derive(Debug, Deserialize)]
struct PathBody {
    path: String,
}

/// Bearer-token HTTP client for a NoteVault server.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    /// Base URL including the `/api` prefix.
    base_url: String,
    /// Bearer token obtained via login.
    token: RwLock<Option<String>>,
}

impl ApiClient {
    /// Create a client for the given base URL (e.g.
    /// `http://localhost:8080/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: RwLock::new(None),
        }
    }

    /// Log in with the shared credential and store the received token.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<()> {
        let response = self
            .http
            .post(format!("{}/login", self.base_url))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await
            .map_err(transport_error)?;

        let body: TokenBody = check(response).await?.json().await.map_err(decode_error)?;
        *self.token.write().expect("token lock poisoned") = Some(body.token);
        debug!(username, "Logged in");
        Ok(())
    }

    /// Whether a token is currently held.
    pub fn is_authenticated(&self) -> bool {
        self.token.read().expect("token lock poisoned").is_some()
    }

    /// Drop the stored token.
    pub fn logout(&self) {
        *self.token.write().expect("token lock poisoned") = None;
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.token.read().expect("token lock poisoned").as_deref() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get(&self, path: &str, query: &[(&str, &str)]) -> AppResult<reqwest::Response> {
        let request = self.authorize(self.http.get(self.url(path)).query(query));
        let response = request.send().await.map_err(transport_error)?;
        check(response).await
    }

    async fn send_json(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &serde_json::Value,
    ) -> AppResult<reqwest::Response> {
        let request = self.authorize(self.http.request(method, self.url(path)).json(body));
        let response = request.send().await.map_err(transport_error)?;
        check(response).await
    }
}

/// Map an HTTP failure status back into the domain error taxonomy.
async fn check(response: reqwest::Response) -> AppResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| {
            serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
                .or(Some(body))
        })
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| status.to_string());

    let kind = match status.as_u16() {
        401 => ErrorKind::Unauthorized,
        403 => ErrorKind::InvalidPath,
        404 => ErrorKind::NotFound,
        409 => ErrorKind::Conflict,
        400 => ErrorKind::Validation,
        _ => ErrorKind::Internal,
    };
    Err(AppError::new(kind, message))
}

fn transport_error(err: reqwest::Error) -> AppError {
    AppError::with_source(ErrorKind::Network, format!("Request failed: {err}"), err)
}

fn decode_error(err: reqwest::Error) -> AppError {
    AppError::with_source(
        ErrorKind::Serialization,
        format!("Failed to decode response: {err}"),
        err,
    )
}

#[async_trait]
impl TreeProvider for ApiClient {
    async fn list_folder(&self, path: &str, depth: u32) -> AppResult<Vec<TreeEntry>> {
        let depth = depth.to_string();
        let response = self.get("/tree", &[("path", path), ("depth", &depth)]).await?;
        response.json().await.map_err(decode_error)
    }

    async fn read_file(&self, path: &str) -> AppResult<String> {
        let response = self.get("/file", &[("path", path)]).await?;
        let body: ContentBody = response.json().await.map_err(decode_error)?;
        Ok(body.content)
    }

    async fn write_file(&self, path: &str, content: &str) -> AppResult<()> {
        self.send_json(
            reqwest::Method::PUT,
            "/file",
            &serde_json::json!({ "path": path, "content": content }),
        )
        .await?;
        Ok(())
    }

    async fn create_file(&self, path: &str, content: &str) -> AppResult<String> {
        let response = self
            .send_json(
                reqwest::Method::POST,
                "/file",
                &serde_json::json!({ "path": path, "content": content }),
            )
            .await?;
        let body: PathBody = response.json().await.map_err(decode_error)?;
        Ok(body.path)
    }

    async fn create_folder(&self, path: &str) -> AppResult<()> {
        self.send_json(
            reqwest::Method::POST,
            "/folder",
            &serde_json::json!({ "path": path }),
        )
        .await?;
        Ok(())
    }

    async fn rename_entry(&self, old_path: &str, new_path: &str) -> AppResult<()> {
        self.send_json(
            reqwest::Method::POST,
            "/file/rename",
            &serde_json::json!({ "oldPath": old_path, "newPath": new_path }),
        )
        .await?;
        Ok(())
    }

    async fn move_entry(
        &self,
        source_path: &str,
        destination_parent_path: &str,
        new_name: &str,
    ) -> AppResult<()> {
        self.send_json(
            reqwest::Method::POST,
            "/file/move",
            &serde_json::json!({
                "sourcePath": source_path,
                "destinationParentPath": destination_parent_path,
                "newName": new_name,
            }),
        )
        .await?;
        Ok(())
    }

    async fn delete_entry(&self, path: &str) -> AppResult<()> {
        let request = self.authorize(self.http.delete(self.url("/file")).query(&[("path", path)]));
        let response = request.send().await.map_err(transport_error)?;
        check(response).await?;
        Ok(())
    }

    async fn read_markdown(&self, path: &str) -> AppResult<String> {
        let response = self.get("/v2/preview", &[("path", path)]).await?;
        let body: MarkdownBody = response.json().await.map_err(decode_error)?;
        Ok(body.markdown)
    }

    async fn render_preview(&self, path: &str) -> AppResult<String> {
        let response = self.get("/preview", &[("path", path)]).await?;
        response.text().await.map_err(decode_error)
    }
}
