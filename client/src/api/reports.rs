use serde_json::json;

use crate::error::ApiError;

use super::client::SessionClient;
use super::types::{ActivityReport, NewReport, Page, ReportFilter, ReportPatch};

impl SessionClient {
    /// Reports visible to the caller; the backend filters by role.
    pub async fn list_reports(&self, filter: &ReportFilter) -> Result<Page<ActivityReport>, ApiError> {
        self.get_json("api/reports/", &filter.to_query()).await
    }

    pub async fn get_report(&self, id: i64) -> Result<ActivityReport, ApiError> {
        self.get_json(&format!("api/reports/{}/", id), &[]).await
    }

    pub async fn create_report(&self, report: &NewReport) -> Result<ActivityReport, ApiError> {
        self.post_json("api/reports/", report).await
    }

    /// Employee edits, only accepted before the report is approved.
    pub async fn update_report(&self, id: i64, patch: &ReportPatch) -> Result<ActivityReport, ApiError> {
        self.patch_json(&format!("api/reports/{}/", id), patch).await
    }

    pub async fn delete_report(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("api/reports/{}/", id)).await
    }

    /// Supervisor/admin approval; stamps the approval timestamp server-side.
    pub async fn approve_report(&self, id: i64) -> Result<ActivityReport, ApiError> {
        self.post_json(&format!("api/reports/{}/approve/", id), &json!({}))
            .await
    }
}
