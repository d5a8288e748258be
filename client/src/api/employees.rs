use crate::error::ApiError;

use super::client::SessionClient;
use super::types::{Employee, EmployeeFilter, EmployeePatch, NewEmployee, Page};

impl SessionClient {
    pub async fn list_employees(&self, filter: &EmployeeFilter) -> Result<Page<Employee>, ApiError> {
        self.get_json("api/employees/", &filter.to_query()).await
    }

    pub async fn get_employee(&self, id: i64) -> Result<Employee, ApiError> {
        self.get_json(&format!("api/employees/{}/", id), &[]).await
    }

    pub async fn create_employee(&self, employee: &NewEmployee) -> Result<Employee, ApiError> {
        self.post_json("api/employees/", employee).await
    }

    pub async fn update_employee(&self, id: i64, employee: &NewEmployee) -> Result<Employee, ApiError> {
        self.put_json(&format!("api/employees/{}/", id), employee).await
    }

    pub async fn patch_employee(&self, id: i64, patch: &EmployeePatch) -> Result<Employee, ApiError> {
        self.patch_json(&format!("api/employees/{}/", id), patch).await
    }
}
