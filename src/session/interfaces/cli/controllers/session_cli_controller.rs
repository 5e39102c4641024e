use clap::Subcommand;
use validator::Validate;

use crate::session::{
    domain::{
        model::{
            enums::session_domain_error::SessionDomainError, value_objects::credential::Credential,
        },
        services::session_identity_service::SessionIdentityService,
    },
    interfaces::cli::resources::sign_in_request_resource::SignInRequestResource,
};

#[derive(Debug, Clone, Subcommand)]
pub enum SessionCommand {
    /// Print the identity of the signed-in subject
    Whoami,
    /// Store a credential and resolve its identity
    SignIn { credential: String },
    /// Remove the stored credential
    SignOut,
    /// Ask the remote authority whether a credential is valid, without storing it
    Check { credential: String },
}

#[derive(Debug, thiserror::Error)]
pub enum SessionCliError {
    #[error("invalid request: {0}")]
    Validation(String),

    #[error(transparent)]
    Domain(#[from] SessionDomainError),
}

pub async fn handle_session_command(
    service: &dyn SessionIdentityService,
    command: SessionCommand,
) -> Result<String, SessionCliError> {
    match command {
        SessionCommand::Whoami => Ok(match service.try_resolve_identity().await {
            Ok(identity) => identity.to_string(),
            Err(failure) => format!("not signed in ({failure})"),
        }),
        SessionCommand::SignIn { credential } => {
            let request = SignInRequestResource { credential };
            request
                .validate()
                .map_err(|e| SessionCliError::Validation(e.to_string()))?;

            let credential = Credential::new(request.credential)?;
            service.store_credential(&credential)?;

            Ok(match service.try_resolve_identity().await {
                Ok(identity) => format!("signed in as {identity}"),
                Err(failure) => format!("credential stored but not accepted: {failure}"),
            })
        }
        SessionCommand::SignOut => {
            service.sign_out()?;
            Ok("signed out".to_string())
        }
        SessionCommand::Check { credential } => {
            let credential = Credential::new(credential)?;
            Ok(if service.is_credential_valid(&credential).await {
                "valid".to_string()
            } else {
                "invalid".to_string()
            })
        }
    }
}
