pub mod remote_authority_facade;
