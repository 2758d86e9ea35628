//! Local cache of the server's employee listing.
//!
//! # Design
//! The snapshot is a non-authoritative copy of the collection, wholly owned
//! by the client side. It supports two maintenance styles: `replace` for a
//! full refresh of the listing, and `apply`/`remove` for merging a single
//! server-confirmed record by id. The snapshot is never touched on a failed
//! operation, so a rejected request leaves the previous listing intact.

use crate::types::Employee;

/// Ordered local copy of the employee collection.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    records: Vec<Employee>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole listing with a fresh one from the server.
    pub fn replace(&mut self, records: Vec<Employee>) {
        self.records = records;
    }

    /// Merge a single server-confirmed record by id: overwrite in place if
    /// the id is already present, append otherwise.
    pub fn apply(&mut self, record: Employee) {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    /// Drop the record with the given id. Returns whether it was present.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    pub fn get(&self, id: i64) -> Option<&Employee> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
