use std::sync::Arc;

use tracing::info;

use crate::{
    config::app_config::AppConfig,
    session::{
        application::{
            acl::http_remote_authority_facade_impl::HttpRemoteAuthorityFacadeImpl,
            services::session_identity_service_impl::{
                SessionCachePolicy, SessionIdentityServiceImpl,
            },
        },
        domain::services::session_identity_service::SessionIdentityService,
        infrastructure::persistence::storage::file_credential_storage_impl::FileCredentialStorageImpl,
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_session_identity_service(
    config: &AppConfig,
) -> Result<Arc<dyn SessionIdentityService>, String> {
    let credential_storage = Arc::new(FileCredentialStorageImpl::new(
        config.credential_storage_path.clone(),
    ));
    let remote_authority = Arc::new(
        HttpRemoteAuthorityFacadeImpl::new(config.auth_check_url(), config.auth_check_timeout)
            .map_err(|e| e.to_string())?,
    );

    info!(
        check_url = %remote_authority.check_url(),
        storage = %config.credential_storage_path.display(),
        "session identity service configured"
    );

    Ok(Arc::new(SessionIdentityServiceImpl::new_with_policy(
        credential_storage,
        remote_authority,
        SessionCachePolicy {
            credential_key: config.credential_storage_key.clone(),
            max_age: config.session_cache_max_age,
            preserve_credential_on_authority_failure: config
                .preserve_credential_on_authority_failure,
        },
    )))
}
