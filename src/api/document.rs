//! Document Endpoints
//!
//! Uploads go out as multipart with a `file` part and a `fileName` field.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;

use super::{check, created_id, ApiClient, DeleteApi, ListApi, StatusResponse};
use crate::error::{ApiError, ApiResult};
use crate::models::Document;

#[derive(Default, Deserialize)]
#[serde(default)]
struct DocumentList {
    documents: Vec<Document>,
}

/// Multipart body for `POST /practice/{id}/upload`
fn upload_form(file_name: &str, bytes: Vec<u8>) -> ApiResult<Form> {
    let part = Part::bytes(bytes)
        .file_name(file_name.to_string())
        .mime_str("application/octet-stream")?;
    Ok(Form::new().part("file", part).text("fileName", file_name.to_string()))
}

impl ApiClient {
    /// `GET /practice/{id}/document`
    pub async fn list_documents(&self, practice_id: &str) -> ApiResult<Vec<Document>> {
        let list: DocumentList = self.get_json(&format!("practice/{}/document", practice_id)).await?;
        Ok(list.documents)
    }

    /// `POST /practice/{id}/upload`
    pub async fn upload_document(&self, practice_id: &str, file_name: &str, bytes: Vec<u8>) -> ApiResult<String> {
        let form = upload_form(file_name, bytes)?;
        let response = self
            .request(Method::POST, &format!("practice/{}/upload", practice_id))
            .multipart(form)
            .send()
            .await?;
        let value: Value = check(response)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        created_id(&value, "documentId")
    }

    /// `GET /document/{id}`, the raw file bytes
    pub async fn fetch_document(&self, id: &str) -> ApiResult<Vec<u8>> {
        self.get_bytes(&format!("document/{}", id)).await
    }

    /// Address the browser can load directly (viewer iframe)
    pub fn document_url(&self, id: &str) -> String {
        self.config.endpoint(&format!("document/{}", id))
    }

    /// `DELETE /document/{id}`
    pub async fn delete_document(&self, id: &str) -> ApiResult<()> {
        let resp: StatusResponse = self.delete_json(&format!("document/{}", id)).await?;
        log::debug!("[api] delete document {}: {}", id, resp.status);
        Ok(())
    }
}

#[async_trait(?Send)]
impl ListApi<Document> for ApiClient {
    async fn list(&self, practice_id: &str) -> ApiResult<Vec<Document>> {
        self.list_documents(practice_id).await
    }
}

#[async_trait(?Send)]
impl DeleteApi<Document> for ApiClient {
    async fn delete(&self, id: &str) -> ApiResult<()> {
        self.delete_document(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::testing::StubServer;

    #[test]
    fn test_document_url() {
        let client = ApiClient::new(ApiConfig::new("http://localhost:8080"));
        assert_eq!(client.document_url("d1"), "http://localhost:8080/v1/ply/document/d1");
    }

    #[tokio::test]
    async fn test_upload_list_delete_consent_pdf() {
        let server = StubServer::start(vec![
            (200, r#"{"documentId":"d1"}"#),
            (200, r#"{"documents":[{"documentId":"d1","practiceId":"p1","file_name":"consent.pdf","storage_path":"uploads/consent.pdf"}]}"#),
            (200, r#"{"status":"deleted"}"#),
            (200, r#"{"documents":[]}"#),
        ])
        .await;
        let api = server.client();

        let id = api.upload_document("p1", "consent.pdf", b"%PDF-1.4".to_vec()).await.unwrap();
        let listed = api.list_documents("p1").await.unwrap();
        api.delete_document(&id).await.unwrap();
        let after = api.list_documents("p1").await.unwrap();

        assert_eq!(id, "d1");
        assert_eq!(listed[0].file_name, "consent.pdf");
        assert!(after.is_empty());

        let seen = server.requests();
        let upload = &seen[0];
        assert_eq!((upload.method.as_str(), upload.path.as_str()), ("POST", "/v1/ply/practice/p1/upload"));
        assert!(upload.header("content-type").unwrap().starts_with("multipart/form-data; boundary="));
        let body = upload.body_text();
        assert!(body.contains(r#"name="file"; filename="consent.pdf""#));
        assert!(body.contains(r#"name="fileName""#));
        assert!(body.contains("%PDF-1.4"));
        assert_eq!((seen[2].method.as_str(), seen[2].path.as_str()), ("DELETE", "/v1/ply/document/d1"));
    }

    #[tokio::test]
    async fn test_fetch_document_returns_raw_bytes() {
        let server = StubServer::start(vec![(200, "%PDF-1.4")]).await;
        let bytes = server.client().fetch_document("d1").await.unwrap();
        assert_eq!(bytes, b"%PDF-1.4".to_vec());
        assert_eq!(server.requests()[0].path, "/v1/ply/document/d1");
    }
}
