//! CLI command implementations

pub mod init;
pub mod ledger;
pub mod level;
pub mod market;
pub mod session;
pub mod status;
