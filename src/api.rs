use chrono::NaiveDate;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::errors::ApiError;
use crate::models::{AttendanceRecord, Employee, NewAttendance};

/// Thin client for the record service. One HTTP request per operation, no
/// retries, no caching; the transport's defaults govern timeouts.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

/// Failure bodies expose a human-readable `detail` or `message` field.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
    message: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let response = self.http.get(self.url("/api/employees/")).send().await?;
        decode(response).await
    }

    pub async fn get_employee(&self, employee_id: &str) -> Result<Employee, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("/api/employees/{employee_id}")))
            .send()
            .await?;
        decode(response).await
    }

    pub async fn create_employee(&self, employee: &Employee) -> Result<Employee, ApiError> {
        let response = self
            .http
            .post(self.url("/api/employees/"))
            .json(employee)
            .send()
            .await?;
        decode(response).await
    }

    /// A 2xx response is taken at face value; its body is ignored.
    pub async fn delete_employee(&self, employee_id: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/employees/{employee_id}")))
            .send()
            .await?;
        if response.status().is_success() {
            return Ok(());
        }
        Err(error_from(response).await)
    }

    /// Date bounds are forwarded as query parameters; the service does the
    /// range filtering.
    pub async fn list_attendance(
        &self,
        from_date: Option<NaiveDate>,
        to_date: Option<NaiveDate>,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(from) = from_date {
            query.push(("from_date", from.to_string()));
        }
        if let Some(to) = to_date {
            query.push(("to_date", to.to_string()));
        }
        let response = self
            .http
            .get(self.url("/api/attendance/"))
            .query(&query)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn list_attendance_by_employee(
        &self,
        employee_id: &str,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("/api/attendance/employee/{employee_id}")))
            .send()
            .await?;
        decode(response).await
    }

    pub async fn create_attendance(
        &self,
        record: &NewAttendance,
    ) -> Result<AttendanceRecord, ApiError> {
        let response = self
            .http
            .post(self.url("/api/attendance/"))
            .json(record)
            .send()
            .await?;
        decode(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.status().is_success() {
        return Err(error_from(response).await);
    }
    Ok(response.json().await?)
}

async fn error_from(response: Response) -> ApiError {
    let body: ErrorBody = response.json().await.unwrap_or_default();
    body.detail
        .or(body.message)
        .map(ApiError::new)
        .unwrap_or_else(ApiError::generic)
}
