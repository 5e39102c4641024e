use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionDomainError {
    #[error("credential is empty")]
    EmptyCredential,

    #[error("credential is malformed: {0}")]
    MalformedCredential(String),

    #[error("subject identity is invalid")]
    InvalidSubjectIdentity,

    #[error("credential storage error: {0}")]
    StorageError(String),
}
