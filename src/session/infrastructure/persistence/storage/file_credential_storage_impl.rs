use std::{
    collections::BTreeMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Mutex,
};

use crate::session::{
    domain::model::enums::session_domain_error::SessionDomainError,
    infrastructure::persistence::storage::credential_storage::CredentialStorage,
};

/// Key-value entries persisted as a flat JSON object. Writes go through a sibling temp file and
/// a rename so a crash never leaves a half-written store.
pub struct FileCredentialStorageImpl {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileCredentialStorageImpl {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, SessionDomainError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(SessionDomainError::StorageError(e.to_string())),
        };

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents).map_err(|e| {
            SessionDomainError::StorageError(format!(
                "{} is not a valid credential store: {e}",
                self.path.display()
            ))
        })
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), SessionDomainError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| SessionDomainError::StorageError(e.to_string()))?;
        }

        let serialized = serde_json::to_string_pretty(entries)
            .map_err(|e| SessionDomainError::StorageError(e.to_string()))?;

        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, serialized)
            .map_err(|e| SessionDomainError::StorageError(e.to_string()))?;
        fs::rename(&temp_path, &self.path)
            .map_err(|e| SessionDomainError::StorageError(e.to_string()))
    }

    fn update<F>(&self, apply: F) -> Result<(), SessionDomainError>
    where
        F: FnOnce(&mut BTreeMap<String, String>) -> bool,
    {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| SessionDomainError::StorageError(e.to_string()))?;

        let mut entries = self.load()?;
        if apply(&mut entries) {
            self.persist(&entries)?;
        }
        Ok(())
    }
}

impl CredentialStorage for FileCredentialStorageImpl {
    fn get(&self, key: &str) -> Result<Option<String>, SessionDomainError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionDomainError> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
            true
        })
    }

    fn remove(&self, key: &str) -> Result<(), SessionDomainError> {
        self.update(|entries| entries.remove(key).is_some())
    }
}
