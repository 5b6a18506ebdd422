//! Command-line front end

pub mod args;
pub mod output;
pub mod query;

pub use args::{Cli, Commands, OutputFormat};
pub use output::Report;
