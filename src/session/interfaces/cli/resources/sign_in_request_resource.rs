use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct SignInRequestResource {
    #[validate(custom(function = "validate_compact_credential"))]
    pub credential: String,
}

lazy_static::lazy_static! {
    pub static ref COMPACT_CREDENTIAL_REGEX: regex::Regex =
        regex::Regex::new(r"^[A-Za-z0-9_-]+={0,2}\.[A-Za-z0-9_-]+={0,2}\.[A-Za-z0-9_-]*={0,2}$")
            .expect("valid regex");
}

fn validate_compact_credential(credential: &str) -> Result<(), validator::ValidationError> {
    if COMPACT_CREDENTIAL_REGEX.is_match(credential.trim()) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("credential_must_be_compact_token"))
    }
}
