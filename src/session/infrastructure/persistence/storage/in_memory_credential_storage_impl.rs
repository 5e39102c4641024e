use std::{collections::HashMap, sync::Mutex};

use crate::session::{
    domain::model::enums::session_domain_error::SessionDomainError,
    infrastructure::persistence::storage::credential_storage::CredentialStorage,
};

#[derive(Default)]
pub struct InMemoryCredentialStorageImpl {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryCredentialStorageImpl {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, SessionDomainError> {
        self.entries
            .lock()
            .map_err(|e| SessionDomainError::StorageError(e.to_string()))
    }
}

impl CredentialStorage for InMemoryCredentialStorageImpl {
    fn get(&self, key: &str) -> Result<Option<String>, SessionDomainError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionDomainError> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionDomainError> {
        self.entries()?.remove(key);
        Ok(())
    }
}
