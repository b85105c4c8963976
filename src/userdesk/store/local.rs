use super::backend::BlobBackend;
use super::{Created, UserStore};
use crate::error::Result;
use crate::model::{User, UserData};

/// Blob key holding the record set: a JSON array of users, insertion order.
pub const USERS_KEY: &str = "users";
/// Blob key holding the sequence counter: a decimal string, the next id.
pub const SEQ_KEY: &str = "users_seq";

/// The local store: a record set plus a monotonic id counter, both persisted
/// through a [`BlobBackend`].
///
/// The record set is never cached here; every operation loads it from the
/// backend and writes it back before returning, so dependent reads always
/// see persisted state.
pub struct LocalStore<B: BlobBackend> {
    backend: B,
}

impl<B: BlobBackend> LocalStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Load the record set, initializing the key on first access.
    /// Malformed persisted state reads as empty rather than failing.
    fn load_users(&self) -> Result<Vec<User>> {
        match self.backend.get(USERS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw).unwrap_or_default()),
            None => {
                self.backend.set(USERS_KEY, "[]")?;
                Ok(Vec::new())
            }
        }
    }

    fn save_users(&self, users: &[User]) -> Result<()> {
        let raw = serde_json::to_string(users)?;
        self.backend.set(USERS_KEY, &raw)
    }

    /// The next id to assign, initializing the counter on first access.
    fn next_id(&self) -> Result<u64> {
        match self.backend.get(SEQ_KEY)? {
            Some(raw) => Ok(raw.trim().parse().unwrap_or(1)),
            None => {
                self.backend.set(SEQ_KEY, "1")?;
                Ok(1)
            }
        }
    }

    fn set_next_id(&self, next: u64) -> Result<()> {
        self.backend.set(SEQ_KEY, &next.to_string())
    }
}

impl<B: BlobBackend> UserStore for LocalStore<B> {
    fn create(&mut self, data: &UserData) -> Result<Created> {
        let mut users = self.load_users()?;
        let id = self.next_id()?;
        // The counter advances before the record lands; ids are never reused
        // even if the record write fails.
        self.set_next_id(id + 1)?;

        users.push(User::new(id, data));
        self.save_users(&users)?;

        Ok(Created { id: Some(id) })
    }

    fn read(&self, id: u64) -> Result<Option<User>> {
        Ok(self.load_users()?.into_iter().find(|u| u.id == id))
    }

    fn update(&mut self, id: u64, data: &UserData) -> Result<Option<User>> {
        let mut users = self.load_users()?;
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };

        user.apply(data);
        let updated = user.clone();
        self.save_users(&users)?;

        Ok(Some(updated))
    }

    fn delete(&mut self, id: u64) -> Result<bool> {
        let mut users = self.load_users()?;
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Ok(false);
        }

        self.save_users(&users)?;
        Ok(true)
    }

    fn list(&self) -> Result<Vec<User>> {
        self.load_users()
    }
}
