//! Task Endpoints
//!
//! Tasks are created by the server; the console only lists and updates them.

use async_trait::async_trait;
use serde::Deserialize;

use super::{ApiClient, ListApi, StatusResponse, UpdateApi};
use crate::error::ApiResult;
use crate::models::Task;

#[derive(Default, Deserialize)]
#[serde(default)]
struct TaskList {
    tasks: Vec<Task>,
}

impl ApiClient {
    /// `GET /practice/{id}/task`
    pub async fn list_tasks(&self, practice_id: &str) -> ApiResult<Vec<Task>> {
        let list: TaskList = self.get_json(&format!("practice/{}/task", practice_id)).await?;
        Ok(list.tasks)
    }

    /// `POST /task/{id}`
    pub async fn update_task(&self, task: &Task) -> ApiResult<()> {
        let resp: StatusResponse = self.post_json(&format!("task/{}", task.id), task).await?;
        log::debug!("[api] update task {}: {}", task.id, resp.status);
        Ok(())
    }
}

#[async_trait(?Send)]
impl ListApi<Task> for ApiClient {
    async fn list(&self, practice_id: &str) -> ApiResult<Vec<Task>> {
        self.list_tasks(practice_id).await
    }
}

#[async_trait(?Send)]
impl UpdateApi<Task> for ApiClient {
    async fn update(&self, record: &Task) -> ApiResult<()> {
        self.update_task(record).await
    }
}
