use super::backend::BlobBackend;
use super::local::LocalStore;
use crate::error::{DeskError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory blob backend for testing.
///
/// Uses `RefCell` for interior mutability since the panel is
/// single-threaded; this keeps the `BlobBackend` trait on `&self` without
/// paying for a lock.
pub struct MemBackend {
    entries: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
            simulate_write_error: RefCell::new(false),
        }
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl BlobBackend for MemBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(DeskError::Store("Simulated write error".to_string()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub type InMemoryStore = LocalStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        LocalStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---


#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeskError;
    use crate::store::UserStore;

    #[test]
    fn simulated_write_error_surfaces_as_store_error() {
        let mut store = InMemoryStore::new();
        store.backend().set_simulate_write_error(true);
        let result = store.create(&fixtures::user_data("Alice", "a@b.com"));
        assert!(matches!(result, Err(DeskError::Store(_))));
    }
}
