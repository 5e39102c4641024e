use std::{
    sync::{
        Arc, PoisonError, RwLock,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::session::{
    domain::{
        model::{
            entities::identity_cache_entry::IdentityCacheEntry,
            enums::{
                identity_resolution_failure::IdentityResolutionFailure,
                session_domain_error::SessionDomainError,
            },
            value_objects::{
                credential::Credential, credential_fingerprint::CredentialFingerprint,
                subject_identity::SubjectIdentity,
            },
        },
        services::session_identity_service::SessionIdentityService,
    },
    infrastructure::persistence::storage::credential_storage::CredentialStorage,
    interfaces::acl::remote_authority_facade::{RemoteAuthorityError, RemoteAuthorityFacade},
};

pub const DEFAULT_CREDENTIAL_KEY: &str = "token";

#[derive(Clone, Debug)]
pub struct SessionCachePolicy {
    pub credential_key: String,
    /// `None` keeps a validated identity for the life of the process.
    pub max_age: Option<Duration>,
    /// Keep the stored credential when the authority cannot be reached, so the next resolve
    /// retries instead of signing the user out.
    pub preserve_credential_on_authority_failure: bool,
}

impl Default for SessionCachePolicy {
    fn default() -> Self {
        Self {
            credential_key: DEFAULT_CREDENTIAL_KEY.to_string(),
            max_age: None,
            preserve_credential_on_authority_failure: false,
        }
    }
}

pub struct SessionIdentityServiceImpl {
    credential_storage: Arc<dyn CredentialStorage>,
    remote_authority: Arc<dyn RemoteAuthorityFacade>,
    policy: SessionCachePolicy,
    cache: RwLock<IdentityCacheEntry>,
    // Bumped by every invalidation; a validation started under an older value must not commit.
    generation: AtomicU64,
    // Serializes validations so concurrent resolvers share one remote call.
    resolve_gate: Mutex<()>,
}

impl SessionIdentityServiceImpl {
    pub fn new(
        credential_storage: Arc<dyn CredentialStorage>,
        remote_authority: Arc<dyn RemoteAuthorityFacade>,
    ) -> Self {
        Self::new_with_policy(
            credential_storage,
            remote_authority,
            SessionCachePolicy::default(),
        )
    }

    pub fn new_with_policy(
        credential_storage: Arc<dyn CredentialStorage>,
        remote_authority: Arc<dyn RemoteAuthorityFacade>,
        policy: SessionCachePolicy,
    ) -> Self {
        Self {
            credential_storage,
            remote_authority,
            policy,
            cache: RwLock::new(IdentityCacheEntry::empty()),
            generation: AtomicU64::new(0),
            resolve_gate: Mutex::new(()),
        }
    }

    fn load_credential(&self) -> Result<Option<Credential>, IdentityResolutionFailure> {
        let stored = self
            .credential_storage
            .get(&self.policy.credential_key)
            .map_err(|e| IdentityResolutionFailure::StorageUnavailable(e.to_string()))?;

        // a blank stored value counts as no credential
        Ok(stored.and_then(|value| Credential::new(value).ok()))
    }

    fn cached_identity(&self, fingerprint: &CredentialFingerprint) -> Option<SubjectIdentity> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .serve(fingerprint, self.policy.max_age)
            .cloned()
    }

    fn clear_cache(&self) {
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn commit(
        &self,
        generation: u64,
        identity: &SubjectIdentity,
        fingerprint: CredentialFingerprint,
    ) -> Result<(), IdentityResolutionFailure> {
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);

        if self.generation.load(Ordering::SeqCst) != generation {
            return Err(IdentityResolutionFailure::InvalidatedDuringValidation);
        }

        *cache = IdentityCacheEntry::validated(identity.clone(), fingerprint);
        Ok(())
    }

    /// Removes the stored credential unless a collaborator already replaced it.
    fn discard_credential(&self, fingerprint: &CredentialFingerprint) {
        match self.load_credential() {
            Ok(Some(current)) if &current.fingerprint() == fingerprint => {
                if let Err(e) = self.credential_storage.remove(&self.policy.credential_key) {
                    warn!(error = %e, "failed to remove rejected credential");
                }
            }
            Ok(_) => debug!("stored credential changed during validation, leaving it in place"),
            Err(e) => warn!(error = %e, "failed to read credential before removal"),
        }
    }

    fn handle_authority_error(
        &self,
        error: RemoteAuthorityError,
        fingerprint: &CredentialFingerprint,
    ) -> IdentityResolutionFailure {
        match error {
            RemoteAuthorityError::Rejected(reason) => {
                info!(fingerprint = %fingerprint, %reason, "credential rejected, signing out");
                self.discard_credential(fingerprint);
                self.clear_cache();
                IdentityResolutionFailure::CredentialRejected(reason)
            }
            RemoteAuthorityError::Unavailable(reason) => {
                if self.policy.preserve_credential_on_authority_failure {
                    warn!(fingerprint = %fingerprint, %reason, "remote authority unavailable, keeping credential");
                } else {
                    warn!(fingerprint = %fingerprint, %reason, "remote authority unavailable, discarding credential");
                    self.discard_credential(fingerprint);
                }
                self.clear_cache();
                IdentityResolutionFailure::AuthorityUnavailable(reason)
            }
        }
    }
}

#[async_trait]
impl SessionIdentityService for SessionIdentityServiceImpl {
    async fn try_resolve_identity(&self) -> Result<SubjectIdentity, IdentityResolutionFailure> {
        let Some(credential) = self.load_credential()? else {
            debug!("no stored credential");
            self.clear_cache();
            return Err(IdentityResolutionFailure::MissingCredential);
        };
        let fingerprint = credential.fingerprint();

        if let Some(identity) = self.cached_identity(&fingerprint) {
            return Ok(identity);
        }

        let _gate = self.resolve_gate.lock().await;

        // another resolver may have validated this credential while we waited
        if let Some(identity) = self.cached_identity(&fingerprint) {
            return Ok(identity);
        }

        let generation = self.generation.load(Ordering::SeqCst);

        let identity = match credential.subject_identity() {
            Ok(Some(identity)) => identity,
            Ok(None) => {
                debug!(fingerprint = %fingerprint, "credential payload has no subject identifier");
                return Err(IdentityResolutionFailure::MissingIdentifierField);
            }
            Err(e) => {
                warn!(fingerprint = %fingerprint, error = %e, "failed to decode stored credential");
                self.clear_cache();
                return Err(IdentityResolutionFailure::MalformedCredential(e.to_string()));
            }
        };

        if let Err(e) = self.remote_authority.check_credential(&credential).await {
            return Err(self.handle_authority_error(e, &fingerprint));
        }

        self.commit(generation, &identity, fingerprint.clone())
            .inspect_err(|_| {
                debug!(fingerprint = %fingerprint, "cache invalidated during validation, discarding result")
            })?;

        debug!(fingerprint = %fingerprint, subject = %identity, "identity validated");
        Ok(identity)
    }

    fn invalidate_cache(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.clear_cache();
        debug!("identity cache invalidated");
    }

    async fn is_credential_valid(&self, credential: &Credential) -> bool {
        self.remote_authority.is_credential_valid(credential).await
    }

    fn store_credential(&self, credential: &Credential) -> Result<(), SessionDomainError> {
        self.credential_storage
            .set(&self.policy.credential_key, credential.value())?;
        self.invalidate_cache();
        info!(fingerprint = %credential.fingerprint(), "credential stored");
        Ok(())
    }

    fn sign_out(&self) -> Result<(), SessionDomainError> {
        self.credential_storage.remove(&self.policy.credential_key)?;
        self.invalidate_cache();
        info!("signed out");
        Ok(())
    }

    fn cache_snapshot(&self) -> IdentityCacheEntry {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
