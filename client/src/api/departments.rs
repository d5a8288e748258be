use crate::error::ApiError;

use super::client::SessionClient;
use super::types::{Department, NewDepartment};

impl SessionClient {
    /// Departments are a small, unpaginated list.
    pub async fn list_departments(&self) -> Result<Vec<Department>, ApiError> {
        self.get_json("api/departments/", &[]).await
    }

    pub async fn get_department(&self, id: i64) -> Result<Department, ApiError> {
        self.get_json(&format!("api/departments/{}/", id), &[]).await
    }

    pub async fn create_department(&self, department: &NewDepartment) -> Result<Department, ApiError> {
        self.post_json("api/departments/", department).await
    }

    pub async fn update_department(&self, id: i64, department: &NewDepartment) -> Result<Department, ApiError> {
        self.put_json(&format!("api/departments/{}/", id), department).await
    }

    pub async fn delete_department(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("api/departments/{}/", id)).await
    }
}
