pub mod identity_cache_entry;
