//! Enrollment Endpoints

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use super::{created_id, ApiClient, CreateApi, DeleteApi, ListApi, StatusResponse, UpdateApi};
use crate::error::ApiResult;
use crate::models::{Activity, Enrollment};

#[derive(Default, Deserialize)]
#[serde(default)]
struct EnrollmentList {
    enrollments: Vec<Enrollment>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct ActivityList {
    activities: Vec<Activity>,
}

impl ApiClient {
    /// `GET /practice/{id}/enrollment`
    pub async fn list_enrollments(&self, practice_id: &str) -> ApiResult<Vec<Enrollment>> {
        let list: EnrollmentList = self.get_json(&format!("practice/{}/enrollment", practice_id)).await?;
        Ok(list.enrollments)
    }

    /// `GET /enrollment/{id}`
    pub async fn get_enrollment(&self, id: &str) -> ApiResult<Enrollment> {
        self.get_json(&format!("enrollment/{}", id)).await
    }

    /// `POST /enrollment`
    pub async fn create_enrollment(&self, enrollment: &Enrollment) -> ApiResult<String> {
        let value: Value = self.post_json("enrollment", enrollment).await?;
        created_id(&value, "enrollmentId")
    }

    /// `POST /enrollment/{id}`
    pub async fn update_enrollment(&self, enrollment: &Enrollment) -> ApiResult<()> {
        let resp: StatusResponse = self.post_json(&format!("enrollment/{}", enrollment.id), enrollment).await?;
        log::debug!("[api] update enrollment {}: {}", enrollment.id, resp.status);
        Ok(())
    }

    /// `DELETE /enrollment/{id}`
    pub async fn delete_enrollment(&self, id: &str) -> ApiResult<()> {
        let resp: StatusResponse = self.delete_json(&format!("enrollment/{}", id)).await?;
        log::debug!("[api] delete enrollment {}: {}", id, resp.status);
        Ok(())
    }

    /// `GET /enrollment/{id}/activity`
    pub async fn list_activities(&self, enrollment_id: &str) -> ApiResult<Vec<Activity>> {
        let list: ActivityList = self.get_json(&format!("enrollment/{}/activity", enrollment_id)).await?;
        Ok(list.activities)
    }
}

#[async_trait(?Send)]
impl ListApi<Enrollment> for ApiClient {
    async fn list(&self, practice_id: &str) -> ApiResult<Vec<Enrollment>> {
        self.list_enrollments(practice_id).await
    }
}

#[async_trait(?Send)]
impl CreateApi<Enrollment> for ApiClient {
    async fn create(&self, record: &Enrollment) -> ApiResult<String> {
        self.create_enrollment(record).await
    }
}

#[async_trait(?Send)]
impl UpdateApi<Enrollment> for ApiClient {
    async fn update(&self, record: &Enrollment) -> ApiResult<()> {
        self.update_enrollment(record).await
    }
}

#[async_trait(?Send)]
impl DeleteApi<Enrollment> for ApiClient {
    async fn delete(&self, id: &str) -> ApiResult<()> {
        self.delete_enrollment(id).await
    }
}
