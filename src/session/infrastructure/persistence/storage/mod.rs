pub mod credential_storage;
pub mod file_credential_storage_impl;
pub mod in_memory_credential_storage_impl;
