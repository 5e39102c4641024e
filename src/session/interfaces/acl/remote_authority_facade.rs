use async_trait::async_trait;

use crate::session::domain::model::value_objects::credential::Credential;

#[derive(Debug, thiserror::Error)]
pub enum RemoteAuthorityError {
    #[error("credential rejected: {0}")]
    Rejected(String),

    #[error("remote authority unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait RemoteAuthorityFacade: Send + Sync {
    /// `Ok(())` only when the authority affirms the credential.
    async fn check_credential(&self, credential: &Credential) -> Result<(), RemoteAuthorityError>;

    async fn is_credential_valid(&self, credential: &Credential) -> bool {
        self.check_credential(credential).await.is_ok()
    }
}
