pub mod http_remote_authority_facade_impl;
