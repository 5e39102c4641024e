use std::fmt;

use serde_json::Value;

use crate::session::domain::model::enums::session_domain_error::SessionDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SubjectIdentity(String);

impl SubjectIdentity {
    pub fn new(value: String) -> Result<Self, SessionDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(SessionDomainError::InvalidSubjectIdentity);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Reads a payload claim as an identifier. Strings and numbers qualify; anything else is absent.
    pub fn from_claim(claim: &Value) -> Option<Self> {
        match claim {
            Value::String(value) => Self::new(value.clone()).ok(),
            Value::Number(value) => Some(Self(value.to_string())),
            _ => None,
        }
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubjectIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
