//! Stateless HTTP request builder and response parser for the employee API.
//!
//! # Design
//! `EmployeeClient` holds only a `base_url` and carries no mutable state
//! between calls. Each CRUD operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip, keeping
//! the core deterministic and free of I/O dependencies.
//!
//! Create and update validate their draft before building anything, so an
//! invalid draft never results in a network call. Any 2xx status counts as
//! success; each operation maps its failures to a dedicated `ApiError` kind.
//! One attempt per call: no retries, no timeouts.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Employee, EmployeeDraft};

/// Path of the employee collection, relative to the base URL.
const COLLECTION_PATH: &str = "/api/employees";

/// Synchronous, stateless client for the employee collection resource.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct EmployeeClient {
    base_url: String,
}

impl EmployeeClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}{COLLECTION_PATH}", self.base_url)
    }

    fn record_url(&self, id: i64) -> String {
        format!("{}{COLLECTION_PATH}/{id}", self.base_url)
    }

    pub fn build_list_employees(&self) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Get, self.collection_url())
    }

    pub fn build_get_employee(&self, id: i64) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Get, self.record_url(id))
    }

    /// Build the create request. Fails fast with `ValidationFailed` on an
    /// empty required field, before any request value exists.
    pub fn build_create_employee(&self, draft: &EmployeeDraft) -> Result<HttpRequest, ApiError> {
        draft.validate()?;
        let body = serde_json::to_string(draft)
            .map_err(|e| ApiError::CreateFailed { reason: format!("request encode failed: {e}") })?;
        Ok(HttpRequest::json(HttpMethod::Post, self.collection_url(), body))
    }

    /// Build the update request. The body is the full record (path id plus
    /// draft fields) — a whole-record overwrite, not a partial patch.
    pub fn build_update_employee(
        &self,
        id: i64,
        draft: &EmployeeDraft,
    ) -> Result<HttpRequest, ApiError> {
        draft.validate()?;
        let record = draft.clone().into_record(id);
        let body = serde_json::to_string(&record)
            .map_err(|e| ApiError::UpdateFailed { reason: format!("request encode failed: {e}") })?;
        Ok(HttpRequest::json(HttpMethod::Put, self.record_url(id), body))
    }

    pub fn build_delete_employee(&self, id: i64) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Delete, self.record_url(id))
    }

    pub fn parse_list_employees(&self, response: HttpResponse) -> Result<Vec<Employee>, ApiError> {
        if !response.is_success() {
            return Err(ApiError::FetchFailed { reason: failure_reason(&response) });
        }
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::FetchFailed { reason: format!("response decode failed: {e}") })
    }

    pub fn parse_get_employee(&self, response: HttpResponse) -> Result<Employee, ApiError> {
        if !response.is_success() {
            return Err(ApiError::NotFound { reason: failure_reason(&response) });
        }
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::FetchFailed { reason: format!("response decode failed: {e}") })
    }

    pub fn parse_create_employee(&self, response: HttpResponse) -> Result<Employee, ApiError> {
        if !response.is_success() {
            return Err(ApiError::CreateFailed { reason: failure_reason(&response) });
        }
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::CreateFailed { reason: format!("response decode failed: {e}") })
    }

    pub fn parse_update_employee(&self, response: HttpResponse) -> Result<Employee, ApiError> {
        if !response.is_success() {
            return Err(ApiError::UpdateFailed { reason: failure_reason(&response) });
        }
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::UpdateFailed { reason: format!("response decode failed: {e}") })
    }

    /// A successful delete carries no body; any 2xx is accepted.
    pub fn parse_delete_employee(&self, response: HttpResponse) -> Result<(), ApiError> {
        if !response.is_success() {
            return Err(ApiError::DeleteFailed { reason: failure_reason(&response) });
        }
        Ok(())
    }
}

/// Human-readable reason string for a non-2xx response.
fn failure_reason(response: &HttpResponse) -> String {
    format!("HTTP {}: {}", response.status, response.body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> EmployeeClient {
        EmployeeClient::new("http://localhost:8080")
    }

    fn draft() -> EmployeeDraft {
        EmployeeDraft {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john@x.com".to_string(),
        }
    }

    #[test]
    fn build_list_employees_produces_correct_request() {
        let req = client().build_list_employees();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8080/api/employees");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_employee_produces_correct_request() {
        let req = client().build_get_employee(7);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8080/api/employees/7");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_employee_produces_correct_request() {
        let req = client().build_create_employee(&draft()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8080/api/employees");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["firstName"], "John");
        assert_eq!(body["lastName"], "Doe");
        assert_eq!(body["email"], "john@x.com");
        assert!(body.get("id").is_none(), "create body must not carry an id");
    }

    #[test]
    fn build_create_employee_rejects_empty_field_without_building() {
        let mut bad = draft();
        bad.email = String::new();
        let err = client().build_create_employee(&bad).unwrap_err();
        assert!(matches!(err, ApiError::ValidationFailed { field: "email" }));
    }

    #[test]
    fn build_update_employee_sends_full_record() {
        let req = client().build_update_employee(3, &draft()).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:8080/api/employees/3");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["id"], 3);
        assert_eq!(body["firstName"], "John");
        assert_eq!(body["lastName"], "Doe");
        assert_eq!(body["email"], "john@x.com");
    }

    #[test]
    fn build_update_employee_rejects_empty_field() {
        let mut bad = draft();
        bad.first_name = String::new();
        let err = client().build_update_employee(3, &bad).unwrap_err();
        assert!(matches!(err, ApiError::ValidationFailed { field: "firstName" }));
    }

    #[test]
    fn build_delete_employee_produces_correct_request() {
        let req = client().build_delete_employee(9);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:8080/api/employees/9");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_employees_success() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"[{"id":1,"firstName":"John","lastName":"Doe","email":"john@x.com"}]"#
                .to_string(),
        };
        let employees = client().parse_list_employees(response).unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].id, 1);
        assert_eq!(employees[0].first_name, "John");
    }

    #[test]
    fn parse_list_employees_non_2xx_is_fetch_failed() {
        let response = HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: "internal error".to_string(),
        };
        let err = client().parse_list_employees(response).unwrap_err();
        match err {
            ApiError::FetchFailed { reason } => assert_eq!(reason, "HTTP 500: internal error"),
            other => panic!("expected FetchFailed, got {other:?}"),
        }
    }

    #[test]
    fn parse_list_employees_bad_json_is_fetch_failed() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: "not json".to_string(),
        };
        let err = client().parse_list_employees(response).unwrap_err();
        assert!(matches!(err, ApiError::FetchFailed { .. }));
    }

    #[test]
    fn parse_get_employee_non_2xx_is_not_found() {
        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: String::new(),
        };
        let err = client().parse_get_employee(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound { .. }));
    }

    #[test]
    fn parse_create_employee_success() {
        let response = HttpResponse {
            status: 201,
            headers: Vec::new(),
            body: r#"{"id":1,"firstName":"John","lastName":"Doe","email":"john@x.com"}"#
                .to_string(),
        };
        let created = client().parse_create_employee(response).unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.email, "john@x.com");
    }

    #[test]
    fn parse_create_employee_wrong_status() {
        let response = HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: "internal error".to_string(),
        };
        let err = client().parse_create_employee(response).unwrap_err();
        assert!(matches!(err, ApiError::CreateFailed { .. }));
    }

    #[test]
    fn parse_update_employee_success() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"{"id":3,"firstName":"Jane","lastName":"Doe","email":"jane@x.com"}"#
                .to_string(),
        };
        let updated = client().parse_update_employee(response).unwrap();
        assert_eq!(updated.id, 3);
        assert_eq!(updated.first_name, "Jane");
    }

    #[test]
    fn parse_delete_employee_success() {
        let response = HttpResponse {
            status: 204,
            headers: Vec::new(),
            body: String::new(),
        };
        assert!(client().parse_delete_employee(response).is_ok());
    }

    #[test]
    fn parse_delete_employee_non_2xx() {
        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: String::new(),
        };
        let err = client().parse_delete_employee(response).unwrap_err();
        assert!(matches!(err, ApiError::DeleteFailed { .. }));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = EmployeeClient::new("http://localhost:8080/");
        let req = client.build_list_employees();
        assert_eq!(req.path, "http://localhost:8080/api/employees");
    }
}
