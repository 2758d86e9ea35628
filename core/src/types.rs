//! Domain DTOs for the employee API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch any drift between the two crates. The wire format
//! uses camelCase field names (`firstName`, `lastName`) to match the backend
//! contract.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// A single employee record returned by the API. `id` is server-assigned and
/// immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// The mutable fields of an employee, used as input to create and update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl EmployeeDraft {
    /// Check that every required field is non-empty, reporting the first
    /// violation by its wire name. No trimming: whitespace-only values pass.
    /// Email format is deliberately not checked.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.first_name.is_empty() {
            return Err(ApiError::ValidationFailed { field: "firstName" });
        }
        if self.last_name.is_empty() {
            return Err(ApiError::ValidationFailed { field: "lastName" });
        }
        if self.email.is_empty() {
            return Err(ApiError::ValidationFailed { field: "email" });
        }
        Ok(())
    }

    /// Promote the draft to a full record under a known id, as sent in the
    /// body of an update (full-record overwrite, not a partial patch).
    pub fn into_record(self, id: i64) -> Employee {
        Employee {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_serializes_with_camel_case_fields() {
        let employee = Employee {
            id: 1,
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john@x.com".to_string(),
        };
        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["firstName"], "John");
        assert_eq!(json["lastName"], "Doe");
        assert_eq!(json["email"], "john@x.com");
    }

    #[test]
    fn employee_roundtrips_through_json() {
        let employee = Employee {
            id: 42,
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            email: "jane@x.com".to_string(),
        };
        let json = serde_json::to_string(&employee).unwrap();
        let back: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(back, employee);
    }

    #[test]
    fn validate_reports_first_empty_field_by_wire_name() {
        let draft = EmployeeDraft::default();
        let err = draft.validate().unwrap_err();
        assert!(matches!(err, ApiError::ValidationFailed { field: "firstName" }));

        let draft = EmployeeDraft {
            first_name: "John".to_string(),
            last_name: String::new(),
            email: String::new(),
        };
        let err = draft.validate().unwrap_err();
        assert!(matches!(err, ApiError::ValidationFailed { field: "lastName" }));

        let draft = EmployeeDraft {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: String::new(),
        };
        let err = draft.validate().unwrap_err();
        assert!(matches!(err, ApiError::ValidationFailed { field: "email" }));
    }

    #[test]
    fn validate_accepts_whitespace_only_values() {
        let draft = EmployeeDraft {
            first_name: " ".to_string(),
            last_name: " ".to_string(),
            email: " ".to_string(),
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn into_record_attaches_the_id() {
        let draft = EmployeeDraft {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john@x.com".to_string(),
        };
        let record = draft.into_record(7);
        assert_eq!(record.id, 7);
        assert_eq!(record.first_name, "John");
    }
}
