//! Provider Endpoints

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use super::{created_id, ApiClient, CreateApi, DeleteApi, ListApi, StatusResponse, UpdateApi};
use crate::error::ApiResult;
use crate::models::Provider;

#[derive(Default, Deserialize)]
#[serde(default)]
struct ProviderList {
    providers: Vec<Provider>,
}

impl ApiClient {
    /// `GET /practice/{id}/provider`
    pub async fn list_providers(&self, practice_id: &str) -> ApiResult<Vec<Provider>> {
        let list: ProviderList = self.get_json(&format!("practice/{}/provider", practice_id)).await?;
        Ok(list.providers)
    }

    /// `GET /provider/{id}`
    pub async fn get_provider(&self, id: &str) -> ApiResult<Provider> {
        self.get_json(&format!("provider/{}", id)).await
    }

    /// `POST /provider`
    pub async fn create_provider(&self, provider: &Provider) -> ApiResult<String> {
        let value: Value = self.post_json("provider", provider).await?;
        created_id(&value, "providerId")
    }

    /// `POST /provider/{id}`
    pub async fn update_provider(&self, provider: &Provider) -> ApiResult<()> {
        let resp: StatusResponse = self.post_json(&format!("provider/{}", provider.id), provider).await?;
        log::debug!("[api] update provider {}: {}", provider.id, resp.status);
        Ok(())
    }

    /// `DELETE /provider/{id}`
    pub async fn delete_provider(&self, id: &str) -> ApiResult<()> {
        let resp: StatusResponse = self.delete_json(&format!("provider/{}", id)).await?;
        log::debug!("[api] delete provider {}: {}", id, resp.status);
        Ok(())
    }
}

#[async_trait(?Send)]
impl ListApi<Provider> for ApiClient {
    async fn list(&self, practice_id: &str) -> ApiResult<Vec<Provider>> {
        self.list_providers(practice_id).await
    }
}

#[async_trait(?Send)]
impl CreateApi<Provider> for ApiClient {
    async fn create(&self, record: &Provider) -> ApiResult<String> {
        self.create_provider(record).await
    }
}

#[async_trait(?Send)]
impl UpdateApi<Provider> for ApiClient {
    async fn update(&self, record: &Provider) -> ApiResult<()> {
        self.update_provider(record).await
    }
}

#[async_trait(?Send)]
impl DeleteApi<Provider> for ApiClient {
    async fn delete(&self, id: &str) -> ApiResult<()> {
        self.delete_provider(id).await
    }
}
