use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::session::domain::model::value_objects::{
    credential_fingerprint::CredentialFingerprint, subject_identity::SubjectIdentity,
};

#[derive(Clone, Debug)]
struct ValidatedIdentity {
    identity: SubjectIdentity,
    credential_fingerprint: CredentialFingerprint,
    validated_at: DateTime<Utc>,
    validated_instant: Instant,
}

/// Last identity confirmed by the remote authority.
///
/// An entry is either empty or validated; there is no way to hold an identity that was not
/// confirmed, so `validated` implies an identity and a missing identity implies not validated.
#[derive(Clone, Debug, Default)]
pub struct IdentityCacheEntry {
    validated: Option<ValidatedIdentity>,
}

impl IdentityCacheEntry {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn validated(identity: SubjectIdentity, credential_fingerprint: CredentialFingerprint) -> Self {
        Self {
            validated: Some(ValidatedIdentity {
                identity,
                credential_fingerprint,
                validated_at: Utc::now(),
                validated_instant: Instant::now(),
            }),
        }
    }

    pub fn identity(&self) -> Option<&SubjectIdentity> {
        self.validated.as_ref().map(|entry| &entry.identity)
    }

    pub fn is_validated(&self) -> bool {
        self.validated.is_some()
    }

    pub fn credential_fingerprint(&self) -> Option<&CredentialFingerprint> {
        self.validated
            .as_ref()
            .map(|entry| &entry.credential_fingerprint)
    }

    pub fn validated_at(&self) -> Option<DateTime<Utc>> {
        self.validated.as_ref().map(|entry| entry.validated_at)
    }

    /// Identity usable without a remote call for the credential with `fingerprint`.
    pub fn serve(
        &self,
        fingerprint: &CredentialFingerprint,
        max_age: Option<Duration>,
    ) -> Option<&SubjectIdentity> {
        let entry = self.validated.as_ref()?;

        if &entry.credential_fingerprint != fingerprint {
            return None;
        }

        if max_age.is_some_and(|max_age| entry.validated_instant.elapsed() >= max_age) {
            return None;
        }

        Some(&entry.identity)
    }

    pub fn clear(&mut self) {
        self.validated = None;
    }
}
