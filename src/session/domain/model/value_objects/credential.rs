use std::fmt;

use base64::{
    Engine as _,
    engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD},
};
use serde_json::{Map, Value};

use crate::session::domain::model::{
    enums::session_domain_error::SessionDomainError,
    value_objects::{
        credential_fingerprint::CredentialFingerprint, subject_identity::SubjectIdentity,
    },
};

/// Payload fields holding the subject identifier, in lookup order.
pub const SUBJECT_ID_CLAIMS: [&str; 4] = ["id", "_id", "userId", "sellerId"];

/// Bearer credential in compact `header.payload.signature` form.
///
/// The payload is decoded only to read the subject identifier; the signature is never checked
/// here. Authenticity comes from the remote authority.
#[derive(Clone, Eq, PartialEq)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: String) -> Result<Self, SessionDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(SessionDomainError::EmptyCredential);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn fingerprint(&self) -> CredentialFingerprint {
        CredentialFingerprint::of(&self.0)
    }

    pub fn decode_payload(&self) -> Result<Map<String, Value>, SessionDomainError> {
        let segment = self
            .0
            .split('.')
            .nth(1)
            .filter(|segment| !segment.is_empty())
            .ok_or_else(|| {
                SessionDomainError::MalformedCredential("missing payload segment".to_string())
            })?;

        let unpadded = segment.trim_end_matches('=');
        let bytes = URL_SAFE_NO_PAD
            .decode(unpadded)
            .or_else(|_| STANDARD_NO_PAD.decode(unpadded))
            .map_err(|e| SessionDomainError::MalformedCredential(e.to_string()))?;

        match serde_json::from_slice::<Value>(&bytes)
            .map_err(|e| SessionDomainError::MalformedCredential(e.to_string()))?
        {
            Value::Object(claims) => Ok(claims),
            _ => Err(SessionDomainError::MalformedCredential(
                "payload is not a JSON object".to_string(),
            )),
        }
    }

    /// `Ok(None)` when the payload decodes but carries none of [`SUBJECT_ID_CLAIMS`].
    pub fn subject_identity(&self) -> Result<Option<SubjectIdentity>, SessionDomainError> {
        let claims = self.decode_payload()?;

        Ok(SUBJECT_ID_CLAIMS
            .iter()
            .find_map(|claim| claims.get(*claim).and_then(SubjectIdentity::from_claim)))
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential")
            .field(&self.fingerprint().short())
            .finish()
    }
}
