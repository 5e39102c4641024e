use crate::session::domain::model::enums::session_domain_error::SessionDomainError;

/// Client-scoped key-value store holding the bearer credential.
pub trait CredentialStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, SessionDomainError>;

    fn set(&self, key: &str, value: &str) -> Result<(), SessionDomainError>;

    fn remove(&self, key: &str) -> Result<(), SessionDomainError>;
}
