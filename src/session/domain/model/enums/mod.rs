pub mod identity_resolution_failure;
pub mod session_domain_error;
