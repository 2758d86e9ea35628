//! Error types for the employee API client.
//!
//! # Design
//! Each operation failure gets its own variant so the display layer can show
//! an operation-specific message ("error creating employee: ..." versus
//! "error fetching employees: ...").
//! `ValidationFailed` is the only kind raised before a request is built; all
//! other kinds carry the HTTP failure reason verbatim. None are fatal — the
//! caller re-triggers the operation manually.

use std::fmt;

/// Errors returned by client build and parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// A required field was empty. Raised before any request is built.
    ValidationFailed { field: &'static str },

    /// Listing the collection failed: non-2xx status or undecodable body.
    FetchFailed { reason: String },

    /// A get-by-id returned a non-2xx status — the record does not exist.
    NotFound { reason: String },

    /// The create request was rejected or its response was undecodable.
    CreateFailed { reason: String },

    /// The update request was rejected or its response was undecodable.
    UpdateFailed { reason: String },

    /// The delete request was rejected.
    DeleteFailed { reason: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::ValidationFailed { field } => {
                write!(f, "validation failed: {field} must not be empty")
            }
            ApiError::FetchFailed { reason } => {
                write!(f, "error fetching employees: {reason}")
            }
            ApiError::NotFound { reason } => {
                write!(f, "employee not found: {reason}")
            }
            ApiError::CreateFailed { reason } => {
                write!(f, "error creating employee: {reason}")
            }
            ApiError::UpdateFailed { reason } => {
                write!(f, "error updating employee: {reason}")
            }
            ApiError::DeleteFailed { reason } => {
                write!(f, "error deleting employee: {reason}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failed_operation() {
        let err = ApiError::CreateFailed {
            reason: "HTTP 500: boom".to_string(),
        };
        assert_eq!(err.to_string(), "error creating employee: HTTP 500: boom");

        let err = ApiError::ValidationFailed { field: "email" };
        assert_eq!(err.to_string(), "validation failed: email must not be empty");
    }
}
