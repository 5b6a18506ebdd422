//! Scripted runner for deterministic testing
//!
//! Serves canned svnlook output keyed by subcommand and records every
//! argument vector it receives, so tests can assert how often (and how) the
//! tool would have been spawned.
//!
//! # Example
//!
//! ```
//! use svn_look::invoker::{ScriptedRunner, Selector};
//! use svn_look::Look;
//!
//! let runner = ScriptedRunner::new().respond("author", "alice\n");
//! let look = Look::with_runner("/repo", Selector::Revision(1), Box::new(runner.clone()));
//!
//! assert_eq!(look.author().unwrap(), "alice");
//! assert_eq!(look.author().unwrap(), "alice");
//! assert_eq!(runner.call_count("author"), 1);
//! ```

use crate::error::{LookError, LookResult};
use crate::invoker::runner::Runner;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// In-memory runner replaying captured output.
///
/// Clones share state, so a test can keep one handle while the session owns
/// another.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRunner {
    inner: Arc<Mutex<ScriptedInner>>,
}

#[derive(Debug, Default)]
struct ScriptedInner {
    /// Output per subcommand.
    responses: HashMap<String, Vec<u8>>,
    /// Exit code per subcommand for simulated failures.
    failures: HashMap<String, i32>,
    /// Every argument vector received, in order.
    calls: Vec<Vec<String>>,
}

impl ScriptedRunner {
    /// Create a runner with no scripted responses
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the stdout of a subcommand
    pub fn respond(self, subcommand: &str, stdout: impl Into<Vec<u8>>) -> Self {
        self.lock()
            .responses
            .insert(subcommand.to_string(), stdout.into());
        self
    }

    /// Make a subcommand exit with the given non-zero code
    pub fn fail(self, subcommand: &str, code: i32) -> Self {
        self.lock().failures.insert(subcommand.to_string(), code);
        self
    }

    /// All argument vectors received so far
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.lock().calls.clone()
    }

    /// Number of times a subcommand was run
    pub fn call_count(&self, subcommand: &str) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|args| args.first().map(String::as_str) == Some(subcommand))
            .count()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ScriptedInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Runner for ScriptedRunner {
    fn run(&self, args: &[String]) -> LookResult<Vec<u8>> {
        let mut inner = self.lock();
        inner.calls.push(args.to_vec());

        let subcommand = args.first().cloned().unwrap_or_default();
        if let Some(&code) = inner.failures.get(&subcommand) {
            return Err(LookError::CommandFailed {
                command: format!("svnlook {}", args.join(" ")),
                code,
            });
        }

        // Unscripted queries behave like svnlook with nothing to report
        Ok(inner.responses.get(&subcommand).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_across_clones() {
        let runner = ScriptedRunner::new().respond("uuid", "abc\n");
        let handle = runner.clone();

        let out = runner.run(&["uuid".to_string(), "/repo".to_string()]).unwrap();
        assert_eq!(out, b"abc\n");
        assert_eq!(handle.call_count("uuid"), 1);
        assert_eq!(handle.calls()[0], vec!["uuid", "/repo"]);
    }

    #[test]
    fn scripted_failure() {
        let runner = ScriptedRunner::new().fail("cat", 1);
        let err = runner.run(&["cat".to_string()]).unwrap_err();
        assert!(matches!(err, LookError::CommandFailed { code: 1, .. }));
    }

    #[test]
    fn unscripted_is_empty() {
        let runner = ScriptedRunner::new();
        assert!(runner.run(&["lock".to_string()]).unwrap().is_empty());
    }
}
