//! Practice Endpoints

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use super::{created_id, ApiClient, CreateApi, StatusResponse, UpdateApi};
use crate::error::ApiResult;
use crate::models::Practice;

#[derive(Default, Deserialize)]
#[serde(default)]
struct PracticeList {
    practices: Vec<Practice>,
}

impl ApiClient {
    /// `POST /practice`
    pub async fn create_practice(&self, practice: &Practice) -> ApiResult<String> {
        let value: Value = self.post_json("practice", practice).await?;
        created_id(&value, "practiceId")
    }

    /// `GET /practice/list`
    pub async fn list_practices(&self) -> ApiResult<Vec<Practice>> {
        let list: PracticeList = self.get_json("practice/list").await?;
        Ok(list.practices)
    }

    /// `GET /practice/{id}`
    pub async fn get_practice(&self, id: &str) -> ApiResult<Practice> {
        self.get_json(&format!("practice/{}", id)).await
    }

    /// `POST /practice/{id}`
    pub async fn update_practice(&self, practice: &Practice) -> ApiResult<()> {
        let resp: StatusResponse = self.post_json(&format!("practice/{}", practice.id), practice).await?;
        log::debug!("[api] update practice {}: {}", practice.id, resp.status);
        Ok(())
    }
}

#[async_trait(?Send)]
impl CreateApi<Practice> for ApiClient {
    async fn create(&self, record: &Practice) -> ApiResult<String> {
        self.create_practice(record).await
    }
}

#[async_trait(?Send)]
impl UpdateApi<Practice> for ApiClient {
    async fn update(&self, record: &Practice) -> ApiResult<()> {
        self.update_practice(record).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubServer;

    #[tokio::test]
    async fn test_practice_routes() {
        let server = StubServer::start(vec![
            (200, r#"{"practiceId":"p1"}"#),
            (200, r#"{"practices":[{"practiceId":"p1","name":"Acme Clinic","ein":"12-3456789","owner_name":"J. Doe"}]}"#),
            (200, r#"{"practiceId":"p1","name":"Acme Clinic","ein":"12-3456789","owner_name":"J. Doe"}"#),
            (200, r#"{"status":"updated"}"#),
        ])
        .await;
        let api = server.client();
        let practice = Practice {
            name: "Acme Clinic".to_string(),
            ein: "12-3456789".to_string(),
            owner_name: "J. Doe".to_string(),
            ..Default::default()
        };

        let id = api.create_practice(&practice).await.unwrap();
        let listed = api.list_practices().await.unwrap();
        let read = api.get_practice(&id).await.unwrap();
        api.update_practice(&read).await.unwrap();

        let seen = server.requests();
        let routes: Vec<(&str, &str)> = seen.iter().map(|r| (r.method.as_str(), r.path.as_str())).collect();
        assert_eq!(
            routes,
            vec![
                ("POST", "/v1/ply/practice"),
                ("GET", "/v1/ply/practice/list"),
                ("GET", "/v1/ply/practice/p1"),
                ("POST", "/v1/ply/practice/p1"),
            ]
        );
        assert_eq!(seen[0].json()["owner_name"], "J. Doe");
        assert!(seen[0].json().get("practiceId").is_none());
        assert_eq!(listed[0], read);
        assert_eq!(read.id, "p1");
    }
}
