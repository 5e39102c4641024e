use thiserror::Error;

/// Why a resolve produced no identity. Collapsed to `None` at the public boundary.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum IdentityResolutionFailure {
    #[error("no credential is stored")]
    MissingCredential,

    #[error("stored credential could not be decoded: {0}")]
    MalformedCredential(String),

    #[error("credential payload has no subject identifier")]
    MissingIdentifierField,

    #[error("remote authority rejected the credential: {0}")]
    CredentialRejected(String),

    #[error("remote authority unavailable: {0}")]
    AuthorityUnavailable(String),

    #[error("credential storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("cache was invalidated while the credential was being validated")]
    InvalidatedDuringValidation,
}
