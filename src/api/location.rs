//! Location Endpoints

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use super::{created_id, ApiClient, CreateApi, DeleteApi, ListApi, StatusResponse, UpdateApi};
use crate::error::ApiResult;
use crate::models::Location;

#[derive(Default, Deserialize)]
#[serde(default)]
struct LocationList {
    locations: Vec<Location>,
}

impl ApiClient {
    /// `GET /practice/{id}/location`
    pub async fn list_locations(&self, practice_id: &str) -> ApiResult<Vec<Location>> {
        let list: LocationList = self.get_json(&format!("practice/{}/location", practice_id)).await?;
        Ok(list.locations)
    }

    /// `GET /location/{id}`
    pub async fn get_location(&self, id: &str) -> ApiResult<Location> {
        self.get_json(&format!("location/{}", id)).await
    }

    /// `POST /location`
    pub async fn create_location(&self, location: &Location) -> ApiResult<String> {
        let value: Value = self.post_json("location", location).await?;
        created_id(&value, "locationId")
    }

    /// `POST /location/{id}`
    pub async fn update_location(&self, location: &Location) -> ApiResult<()> {
        let resp: StatusResponse = self.post_json(&format!("location/{}", location.id), location).await?;
        log::debug!("[api] update location {}: {}", location.id, resp.status);
        Ok(())
    }

    /// `DELETE /location/{id}`
    pub async fn delete_location(&self, id: &str) -> ApiResult<()> {
        let resp: StatusResponse = self.delete_json(&format!("location/{}", id)).await?;
        log::debug!("[api] delete location {}: {}", id, resp.status);
        Ok(())
    }
}

#[async_trait(?Send)]
impl ListApi<Location> for ApiClient {
    async fn list(&self, practice_id: &str) -> ApiResult<Vec<Location>> {
        self.list_locations(practice_id).await
    }
}

#[async_trait(?Send)]
impl CreateApi<Location> for ApiClient {
    async fn create(&self, record: &Location) -> ApiResult<String> {
        self.create_location(record).await
    }
}

#[async_trait(?Send)]
impl UpdateApi<Location> for ApiClient {
    async fn update(&self, record: &Location) -> ApiResult<()> {
        self.update_location(record).await
    }
}

#[async_trait(?Send)]
impl DeleteApi<Location> for ApiClient {
    async fn delete(&self, id: &str) -> ApiResult<()> {
        self.delete_location(id).await
    }
}
