use async_trait::async_trait;

use crate::session::domain::model::{
    entities::identity_cache_entry::IdentityCacheEntry,
    enums::{
        identity_resolution_failure::IdentityResolutionFailure,
        session_domain_error::SessionDomainError,
    },
    value_objects::{credential::Credential, subject_identity::SubjectIdentity},
};

#[async_trait]
pub trait SessionIdentityService: Send + Sync {
    /// Identity of the signed-in subject, or `None`. Never fails.
    async fn resolve_identity(&self) -> Option<SubjectIdentity> {
        self.try_resolve_identity().await.ok()
    }

    async fn try_resolve_identity(&self) -> Result<SubjectIdentity, IdentityResolutionFailure>;

    /// Drops the cached identity. The stored credential is left alone.
    fn invalidate_cache(&self);

    async fn is_credential_valid(&self, credential: &Credential) -> bool;

    fn store_credential(&self, credential: &Credential) -> Result<(), SessionDomainError>;

    fn sign_out(&self) -> Result<(), SessionDomainError>;

    fn cache_snapshot(&self) -> IdentityCacheEntry;
}
