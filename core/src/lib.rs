//! Synchronous API client core for the employee directory service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `EmployeeClient` is stateless — it holds only `base_url`. Each CRUD
//!   operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - `EmployeeDirectory` layers the locally cached listing (`Snapshot`) on
//!   top: completions merge server-confirmed records by id, and a failed
//!   operation never disturbs the cache.
//! - `FeedClient` covers the message feed endpoint the demo pages render as
//!   simulated blog posts.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod directory;
pub mod error;
pub mod feed;
pub mod http;
pub mod snapshot;
pub mod types;

pub use client::EmployeeClient;
pub use directory::EmployeeDirectory;
pub use error::ApiError;
pub use feed::{posts_from_messages, FeedClient, Post};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use snapshot::Snapshot;
pub use types::{Employee, EmployeeDraft};
