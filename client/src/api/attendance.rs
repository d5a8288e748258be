use chrono::NaiveDate;
use serde_json::json;

use crate::error::ApiError;

use super::client::SessionClient;
use super::types::{AttendanceRecord, AttendanceStatus, Page, TodaySummary};

impl SessionClient {
    /// Current clock state of the authenticated employee.
    pub async fn attendance_status(&self) -> Result<AttendanceStatus, ApiError> {
        self.get_json("api/attendance/status/", &[]).await
    }

    pub async fn clock_in(&self) -> Result<AttendanceRecord, ApiError> {
        self.post_json("api/attendance/clock-in/", &json!({})).await
    }

    pub async fn clock_out(&self) -> Result<AttendanceRecord, ApiError> {
        self.post_json("api/attendance/clock-out/", &json!({})).await
    }

    pub async fn today_summary(&self) -> Result<TodaySummary, ApiError> {
        self.get_json("api/attendance/today/", &[]).await
    }

    /// Personal attendance history of the authenticated employee.
    pub async fn attendance_history(&self) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.get_json("api/attendance/history/", &[]).await
    }

    /// Supervisor view of the team's attendance, optionally for one day.
    pub async fn team_attendance(
        &self,
        date: Option<NaiveDate>,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let mut query = Vec::new();
        if let Some(date) = date {
            query.push(("date", date.format("%Y-%m-%d").to_string()));
        }
        self.get_json("api/attendance/team/", &query).await
    }

    pub async fn list_attendance(&self, page: Option<u32>) -> Result<Page<AttendanceRecord>, ApiError> {
        let mut query = Vec::new();
        if let Some(page) = page {
            query.push(("page", page.to_string()));
        }
        self.get_json("api/attendance/", &query).await
    }

    pub async fn get_attendance(&self, id: i64) -> Result<AttendanceRecord, ApiError> {
        self.get_json(&format!("api/attendance/{}/", id), &[]).await
    }
}
