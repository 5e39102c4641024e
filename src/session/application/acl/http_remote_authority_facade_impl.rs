use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::session::{
    domain::model::value_objects::credential::Credential,
    interfaces::acl::remote_authority_facade::{RemoteAuthorityError, RemoteAuthorityFacade},
};

#[derive(Debug, Deserialize)]
struct AuthCheckResponse {
    #[serde(default)]
    valid: Option<bool>,
}

/// Asks `GET /api/auth/check` whether a bearer credential is still accepted.
///
/// 400, 401 and 403 answers and success bodies without `"valid": true` are rejections. Every
/// other status, transport errors and bodies that are not the expected JSON mean the authority
/// could not answer (429, 408 and a 404 from a misconfigured path included).
#[derive(Clone, Debug)]
pub struct HttpRemoteAuthorityFacadeImpl {
    check_url: String,
    client: reqwest::Client,
}

impl HttpRemoteAuthorityFacadeImpl {
    pub fn new(check_url: String, timeout: Duration) -> Result<Self, RemoteAuthorityError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteAuthorityError::Unavailable(e.to_string()))?;

        Ok(Self { check_url, client })
    }

    pub fn check_url(&self) -> &str {
        &self.check_url
    }
}

fn is_auth_refusal(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
    )
}

#[async_trait]
impl RemoteAuthorityFacade for HttpRemoteAuthorityFacadeImpl {
    async fn check_credential(&self, credential: &Credential) -> Result<(), RemoteAuthorityError> {
        debug!(
            url = %self.check_url,
            fingerprint = %credential.fingerprint(),
            "checking credential with remote authority"
        );

        let response = self
            .client
            .get(&self.check_url)
            .bearer_auth(credential.value())
            .send()
            .await
            .map_err(|e| RemoteAuthorityError::Unavailable(e.to_string()))?;

        let status = response.status();
        if is_auth_refusal(status) {
            return Err(RemoteAuthorityError::Rejected(format!(
                "authority responded with status {status}"
            )));
        }
        if !status.is_success() {
            return Err(RemoteAuthorityError::Unavailable(format!(
                "authority responded with status {status}"
            )));
        }

        let body: AuthCheckResponse = response.json().await.map_err(|e| {
            RemoteAuthorityError::Unavailable(format!("malformed response body: {e}"))
        })?;

        match body.valid {
            Some(true) => Ok(()),
            Some(false) => Err(RemoteAuthorityError::Rejected(
                "authority reported the credential as invalid".to_string(),
            )),
            None => Err(RemoteAuthorityError::Rejected(
                "authority response carries no validity flag".to_string(),
            )),
        }
    }
}
