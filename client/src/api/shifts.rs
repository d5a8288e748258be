use serde_json::json;

use crate::error::ApiError;

use super::client::SessionClient;
use super::types::{NewShift, Page, Shift, ShiftFilter};

impl SessionClient {
    pub async fn list_shifts(&self, filter: &ShiftFilter) -> Result<Page<Shift>, ApiError> {
        self.get_json("api/shifts/", &filter.to_query()).await
    }

    pub async fn get_shift(&self, id: i64) -> Result<Shift, ApiError> {
        self.get_json(&format!("api/shifts/{}/", id), &[]).await
    }

    pub async fn create_shift(&self, shift: &NewShift) -> Result<Shift, ApiError> {
        self.post_json("api/shifts/", shift).await
    }

    pub async fn update_shift(&self, id: i64, shift: &NewShift) -> Result<Shift, ApiError> {
        self.put_json(&format!("api/shifts/{}/", id), shift).await
    }

    /// Marks a scheduled shift as started (status moves to Active).
    pub async fn start_shift(&self, id: i64) -> Result<Shift, ApiError> {
        self.patch_json(&format!("api/shifts/{}/start/", id), &json!({}))
            .await
    }

    /// Marks an active shift as ended (status moves to Completed).
    pub async fn end_shift(&self, id: i64) -> Result<Shift, ApiError> {
        self.patch_json(&format!("api/shifts/{}/end/", id), &json!({}))
            .await
    }
}
