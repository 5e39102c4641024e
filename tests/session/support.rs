#[path = "support/stub_authority.rs"]
pub mod stub_authority;

pub use fakes::FakeVerdict;
pub use fixtures::{
    credential_with_payload, malformed_credential, seller_credential, user_credential,
    CREDENTIAL_KEY,
};
pub use harness::{create_harness, create_harness_with_policy};
