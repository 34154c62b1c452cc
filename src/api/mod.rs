//! Practice API Client
//!
//! One `async fn` per REST endpoint, grouped by resource. Every call resolves
//! to the parsed payload or an `ApiError`.

mod practice;
mod location;
mod provider;
mod enrollment;
mod task;
mod document;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::Entity;

/// HTTP client bound to one API base
#[derive(Clone, Debug)]
pub struct ApiClient {
    config: Arc<ApiConfig>,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config: Arc::new(config),
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.config.endpoint(path));
        with_credentials(builder, self.config.with_credentials)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = check(self.request(Method::GET, path).send().await?).await?;
        response.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        let response = check(self.request(Method::POST, path).json(body).send().await?).await?;
        response.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = check(self.request(Method::DELETE, path).send().await?).await?;
        response.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get_bytes(&self, path: &str) -> ApiResult<Vec<u8>> {
        let response = check(self.request(Method::GET, path).send().await?).await?;
        let bytes = response.bytes().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(builder: RequestBuilder, include: bool) -> RequestBuilder {
    if include {
        builder.fetch_credentials_include()
    } else {
        builder
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(builder: RequestBuilder, _include: bool) -> RequestBuilder {
    builder
}

/// Turn any non-2xx answer into `ApiError::Status`
async fn check(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(status_error(status.as_u16(), body))
}

fn status_error(status: u16, body: String) -> ApiError {
    let message = if body.trim().is_empty() {
        reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("request failed")
            .to_string()
    } else {
        body.trim().to_string()
    };
    ApiError::Status { status, message }
}

/// Pull the server-assigned id out of a create response such as `{"locationId": "..."}`
fn created_id(value: &Value, key: &str) -> ApiResult<String> {
    match value.get(key).and_then(Value::as_str) {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(ApiError::Decode(format!("response is missing {}", key))),
    }
}

/// `{"status": "..."}` answer of update and delete calls
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StatusResponse {
    status: String,
}

// ========================
// Resource Seams
// ========================

/// Fetch every record of one kind owned by a practice
#[async_trait(?Send)]
pub trait ListApi<T: Entity> {
    async fn list(&self, practice_id: &str) -> ApiResult<Vec<T>>;
}

/// Create a record, returning the id the server assigned
#[async_trait(?Send)]
pub trait CreateApi<T: Entity> {
    async fn create(&self, record: &T) -> ApiResult<String>;
}

/// Replace a record by its id
#[async_trait(?Send)]
pub trait UpdateApi<T: Entity> {
    async fn update(&self, record: &T) -> ApiResult<()>;
}

/// Delete a record by its id
#[async_trait(?Send)]
pub trait DeleteApi<T: Entity> {
    async fn delete(&self, id: &str) -> ApiResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubServer;
    use serde_json::json;

    #[test]
    fn test_created_id() {
        let value = json!({"practiceId": "p-42"});
        assert_eq!(created_id(&value, "practiceId").unwrap(), "p-42");
    }

    #[test]
    fn test_created_id_missing_or_empty() {
        assert!(matches!(created_id(&json!({}), "locationId"), Err(ApiError::Decode(_))));
        assert!(matches!(created_id(&json!({"locationId": ""}), "locationId"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_status_error_uses_body_or_reason() {
        assert_eq!(
            status_error(500, "  database down\n".to_string()),
            ApiError::Status { status: 500, message: "database down".to_string() }
        );
        assert_eq!(
            status_error(500, String::new()),
            ApiError::Status { status: 500, message: "Internal Server Error".to_string() }
        );
    }

    #[tokio::test]
    async fn test_server_error_becomes_status() {
        let server = StubServer::start(vec![(500, "database down"), (500, "")]).await;
        let api = server.client();

        let err = api.list_locations("p1").await.unwrap_err();
        assert_eq!(err, ApiError::Status { status: 500, message: "database down".to_string() });

        let err = api.delete_provider("pr1").await.unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_create_without_id_is_decode_error() {
        let server = StubServer::start(vec![(200, r#"{"providerId":""}"#)]).await;
        let err = server.client().create_provider(&crate::models::Provider::default()).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_client_uses_configured_base() {
        let client = ApiClient::new(ApiConfig::new("https://ply.example.org"));
        assert_eq!(client.config().endpoint("practice/list"), "https://ply.example.org/v1/ply/practice/list");
    }
}
