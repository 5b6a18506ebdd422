//! svn-look - caching facade over svnlook
//!
//! Runs `svnlook` once per distinct query against a single repository
//! revision or transaction, parses its output into typed values, and keeps
//! them for the lifetime of a [`Look`] session.

pub mod cli;
pub mod config;
pub mod error;
pub mod invoker;
pub mod look;

pub use error::{LookError, LookResult};
pub use invoker::Selector;
pub use look::Look;
