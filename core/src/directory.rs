//! Snapshot-maintaining wrapper over the stateless client.
//!
//! # Design
//! `EmployeeDirectory` pairs an `EmployeeClient` with a `Snapshot` and keeps
//! the two consistent: each operation has a request-producing method and a
//! `complete_*` method that consumes the host-executed response and updates
//! the snapshot on success. Instead of re-fetching the whole collection after
//! every mutation, the server's returned record is merged into the snapshot
//! by id (a delete removes by id). Every completion reports its outcome as an
//! explicit `Result`; there are no ambient loading or error flags.
//!
//! Overlapping in-flight operations are not serialized — a rapid
//! double-submit can interleave completions in request order, which is the
//! caller's concern.

use crate::client::EmployeeClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::snapshot::Snapshot;
use crate::types::{Employee, EmployeeDraft};

/// Client-side view of the employee collection: a stateless request
/// builder/parser plus the locally cached listing.
#[derive(Debug, Clone)]
pub struct EmployeeDirectory {
    client: EmployeeClient,
    snapshot: Snapshot,
}

impl EmployeeDirectory {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: EmployeeClient::new(base_url),
            snapshot: Snapshot::new(),
        }
    }

    /// The cached listing, in server order as of the last refresh.
    pub fn employees(&self) -> &[Employee] {
        self.snapshot.records()
    }

    pub fn find(&self, id: i64) -> Option<&Employee> {
        self.snapshot.get(id)
    }

    // --- refresh (full listing) ---

    pub fn refresh_request(&self) -> HttpRequest {
        self.client.build_list_employees()
    }

    /// Replace the snapshot with the fetched listing. On any failure the
    /// previous snapshot is left unchanged.
    pub fn complete_refresh(&mut self, response: HttpResponse) -> Result<&[Employee], ApiError> {
        let listing = self.client.parse_list_employees(response)?;
        self.snapshot.replace(listing);
        Ok(self.snapshot.records())
    }

    // --- lookup (single record, read-only) ---

    pub fn lookup_request(&self, id: i64) -> HttpRequest {
        self.client.build_get_employee(id)
    }

    /// Parse a single-record fetch. Does not touch the snapshot: viewing a
    /// record must not alter the listing.
    pub fn complete_lookup(&self, response: HttpResponse) -> Result<Employee, ApiError> {
        self.client.parse_get_employee(response)
    }

    // --- create ---

    pub fn create_request(&self, draft: &EmployeeDraft) -> Result<HttpRequest, ApiError> {
        self.client.build_create_employee(draft)
    }

    /// Merge the server-assigned record into the snapshot and return it.
    pub fn complete_create(&mut self, response: HttpResponse) -> Result<Employee, ApiError> {
        let created = self.client.parse_create_employee(response)?;
        self.snapshot.apply(created.clone());
        Ok(created)
    }

    // --- update ---

    pub fn update_request(&self, id: i64, draft: &EmployeeDraft) -> Result<HttpRequest, ApiError> {
        self.client.build_update_employee(id, draft)
    }

    /// Merge the server's overwritten record into the snapshot by id.
    pub fn complete_update(&mut self, response: HttpResponse) -> Result<Employee, ApiError> {
        let updated = self.client.parse_update_employee(response)?;
        self.snapshot.apply(updated.clone());
        Ok(updated)
    }

    // --- delete ---

    /// Confirmation ("are you sure?") is the caller's concern; by the time a
    /// delete request is built, the decision has been made.
    pub fn delete_request(&self, id: i64) -> HttpRequest {
        self.client.build_delete_employee(id)
    }

    /// Remove the record from the snapshot once the server confirms. The id
    /// is passed back in because a successful delete response has no body.
    pub fn complete_delete(&mut self, id: i64, response: HttpResponse) -> Result<(), ApiError> {
        self.client.parse_delete_employee(response)?;
        self.snapshot.remove(id);
        Ok(())
    }
}
