pub mod credential;
pub mod credential_fingerprint;
pub mod subject_identity;
