//! Subprocess runner abstraction
//!
//! The invoker talks to svnlook through this trait so sessions can be driven
//! by captured output in tests.

use crate::error::LookResult;

/// Something that can execute svnlook with an argument vector
pub trait Runner: Send + Sync {
    /// Run the tool to completion and return everything it wrote to stdout.
    ///
    /// Implementations must reap the child before returning.
    fn run(&self, args: &[String]) -> LookResult<Vec<u8>>;
}
