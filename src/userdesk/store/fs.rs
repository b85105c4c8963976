use super::backend::BlobBackend;
use super::local::LocalStore;
use crate::error::{DeskError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem blob backend: one file per key under the data directory.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(DeskError::Io)?;
        }
        Ok(())
    }
}

impl BlobBackend for FsBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(path).map_err(DeskError::Io)?;
        Ok(Some(value))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;

        // Atomic write
        let tmp_path = self.root.join(format!(".{}-{}.tmp", key, std::process::id()));
        fs::write(&tmp_path, value).map_err(DeskError::Io)?;
        fs::rename(&tmp_path, self.key_path(key)).map_err(DeskError::Io)?;

        Ok(())
    }
}

/// The production store: records persisted under the data directory.
pub type FileStore = LocalStore<FsBackend>;

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        LocalStore::with_backend(FsBackend::new(root))
    }
}
