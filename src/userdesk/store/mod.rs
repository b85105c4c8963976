//! # Storage Layer
//!
//! This module defines the storage abstraction for userdesk. The
//! [`UserStore`] trait lets the command layer work against interchangeable
//! backends.
//!
//! ## Implementations
//!
//! - [`local::LocalStore`]: the record set persisted through a string-keyed
//!   blob backend, plus a monotonic sequence counter for id assignment.
//!   - [`fs::FileStore`]: production variant, one file per key under the
//!     data directory
//!   - [`memory::InMemoryStore`]: in-memory variant for fast, isolated tests
//! - [`remote::RemoteStore`]: a REST resource reached with a blocking HTTP
//!   client. It never lists records; single-record loads only.
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── users         # JSON array of user records, insertion order
//! ├── users_seq     # decimal string, the next id to assign
//! └── config.json   # panel configuration
//! ```
//!
//! Both store keys are created (`[]` and `1`) on first access. There is no
//! schema-version field in this layout.

use crate::error::Result;
use crate::model::{User, UserData};

pub mod backend;
pub mod fs;
pub mod local;
pub mod memory;
pub mod remote;

/// Outcome of a create call.
///
/// The id is `None` when the backend acknowledged the creation without
/// echoing an identifier (mock REST backends do this); such a record cannot
/// be loaded back, which callers report distinctly from a hard failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Created {
    pub id: Option<u64>,
}

/// Abstract interface for user-record persistence.
pub trait UserStore {
    /// Assign an identifier and persist a new record.
    fn create(&mut self, data: &UserData) -> Result<Created>;

    /// Fetch a record by id. A missing id is `Ok(None)`, never an error,
    /// for backends that can tell the difference.
    fn read(&self, id: u64) -> Result<Option<User>>;

    /// Merge the payload onto the record with the given id and return the
    /// new authoritative record, or `None` when the id does not exist.
    fn update(&mut self, id: u64, data: &UserData) -> Result<Option<User>>;

    /// Remove the record with the given id; reports whether anything was
    /// removed.
    fn delete(&mut self, id: u64) -> Result<bool>;

    /// The full record set, insertion order.
    fn list(&self) -> Result<Vec<User>>;

    /// Whether this backend can enumerate records at all.
    fn supports_listing(&self) -> bool {
        true
    }
}
