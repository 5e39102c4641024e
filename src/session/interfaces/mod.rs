pub mod acl;
pub mod cli;
