use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Normalized pagination envelope for list endpoints.
///
/// The backend paginates with `count`/`next`/`previous`/`results`; follow
/// the links with [`crate::SessionClient::follow_page`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct RefreshResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    #[serde(default)]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDepartment {
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeRole {
    Supervisor,
    #[serde(rename = "Employee_Agent")]
    Agent,
    Admin,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub user: UserProfile,
    #[serde(default)]
    pub department: Option<Department>,
    pub user_type: EmployeeRole,
    #[serde(default)]
    pub shift_start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub shift_end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub supervisor: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEmployee {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<i64>,
    pub user_type: EmployeeRole,
}

/// Partial update for an employee profile; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmployeePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<EmployeeRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supervisor: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift_start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift_end_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
    pub search: Option<String>,
    pub department: Option<i64>,
    pub page: Option<u32>,
}

impl EmployeeFilter {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(search) = &self.search {
            query.push(("search", search.clone()));
        }
        if let Some(department) = self.department {
            query.push(("department", department.to_string()));
        }
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        query
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftType {
    #[serde(rename = "Day_Shift")]
    Day,
    #[serde(rename = "Late")]
    Late,
    #[serde(rename = "Recon_Shift")]
    Recon,
    #[serde(rename = "Night_Shift")]
    Night,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftStatus {
    Scheduled,
    Active,
    Completed,
    Missed,
}

impl ShiftStatus {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            ShiftStatus::Scheduled => "Scheduled",
            ShiftStatus::Active => "Active",
            ShiftStatus::Completed => "Completed",
            ShiftStatus::Missed => "Missed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shift {
    pub id: i64,
    pub shift_agent: Employee,
    pub shift_date: NaiveDate,
    pub shift_start_time: NaiveTime,
    #[serde(default)]
    pub shift_end_time: Option<NaiveTime>,
    pub shift_type: ShiftType,
    pub shift_status: ShiftStatus,
    #[serde(default)]
    pub shift_timer_count: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewShift {
    pub shift_agent: i64,
    pub shift_date: NaiveDate,
    pub shift_start_time: NaiveTime,
    pub shift_end_time: NaiveTime,
    pub shift_type: ShiftType,
}

#[derive(Debug, Clone, Default)]
pub struct ShiftFilter {
    pub agent: Option<i64>,
    pub date: Option<NaiveDate>,
    pub status: Option<ShiftStatus>,
    pub page: Option<u32>,
}

impl ShiftFilter {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(agent) = self.agent {
            query.push(("agent", agent.to_string()));
        }
        if let Some(date) = self.date {
            query.push(("date", date.format("%Y-%m-%d").to_string()));
        }
        if let Some(status) = self.status {
            query.push(("status", status.as_str().to_string()));
        }
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        query
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockState {
    ClockedIn,
    ClockedOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub employee: i64,
    pub date: NaiveDate,
    #[serde(default)]
    pub clock_in_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub clock_out_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub total_hours: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceStatus {
    pub status: ClockState,
    #[serde(default)]
    pub attendance_id: Option<i64>,
    #[serde(default)]
    pub clock_in_time: Option<DateTime<Utc>>,
}

/// Aggregate counts shown on the dashboard for the current day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodaySummary {
    pub date: NaiveDate,
    pub total_employees: i64,
    pub clocked_in: i64,
    pub clocked_out: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportType {
    #[serde(rename = "End_of_Shift")]
    EndOfShift,
    Emergency,
    Break,
    Other,
}

impl ReportType {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            ReportType::EndOfShift => "End_of_Shift",
            ReportType::Emergency => "Emergency",
            ReportType::Break => "Break",
            ReportType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityReport {
    pub id: i64,
    pub shift_active_agent: i64,
    pub supervisor: i64,
    pub shift_activity_type: ShiftType,
    pub report_type: ReportType,
    pub activity_description: String,
    pub tickets_resolved: i32,
    pub calls_made: i32,
    pub issues_escalated: i32,
    #[serde(default)]
    pub notes: String,
    pub activity_submitted_at: DateTime<Utc>,
    pub is_approved: bool,
    #[serde(default)]
    pub activity_approved_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReport {
    pub supervisor: i64,
    pub shift_activity_type: ShiftType,
    pub report_type: ReportType,
    pub activity_description: String,
    pub tickets_resolved: i32,
    pub calls_made: i32,
    pub issues_escalated: i32,
    #[serde(default)]
    pub notes: String,
}

/// Employee-side edits allowed before a report is approved.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickets_resolved: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calls_made: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues_escalated: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    pub report_type: Option<ReportType>,
    pub approved: Option<bool>,
    pub page: Option<u32>,
}

impl ReportFilter {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(report_type) = self.report_type {
            query.push(("report_type", report_type.as_str().to_string()));
        }
        if let Some(approved) = self.approved {
            query.push(("is_approved", approved.to_string()));
        }
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        query
    }
}
