pub mod session_identity_service_impl;
