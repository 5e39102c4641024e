use std::fmt;

use sha2::{Digest, Sha256};

/// SHA-256 of a credential. Lets the cache and the logs refer to a credential without holding it.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CredentialFingerprint(String);

impl CredentialFingerprint {
    pub fn of(raw_credential: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(raw_credential.as_bytes());
        Self(format!("{:x}", hasher.finalize()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn short(&self) -> &str {
        &self.0[..12]
    }
}

impl fmt::Display for CredentialFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short())
    }
}
