//! Command invoker for svnlook
//!
//! Builds the svnlook command line for one repository and selector, runs it
//! through a [`Runner`], and shapes captured stdout into text, lines or bytes:
//!
//! ```text
//! svnlook SUBCOMMAND REPO [-r REV | -t TXN] [EXTRA...]
//! ```
//!
//! Repository-global subcommands (`youngest`, `uuid`, `lock`) never receive
//! the selector pair.

mod runner;
mod scripted;
mod selector;
mod svnlook;

pub use runner::Runner;
pub use scripted::ScriptedRunner;
pub use selector::Selector;
pub use svnlook::{parse_min_version, parse_version, SvnlookRunner};

use crate::error::LookResult;
use std::path::{Path, PathBuf};

/// Subcommands that take no `-r`/`-t` argument
const SELECTOR_AGNOSTIC: &[&str] = &["youngest", "uuid", "lock"];

/// Requested shape of a command's output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Whole output, one trailing newline removed
    Text,
    /// One entry per line, newlines removed
    Lines,
    /// Raw bytes, one trailing newline removed
    Bytes,
}

/// Shaped command output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Text(String),
    Lines(Vec<String>),
    Bytes(Vec<u8>),
}

impl Output {
    /// Shape raw stdout
    pub fn from_stdout(stdout: Vec<u8>, shape: Shape) -> Self {
        match shape {
            Shape::Text => Self::Text(chomp_text(&stdout)),
            Shape::Lines => Self::Lines(split_lines(&stdout)),
            Shape::Bytes => Self::Bytes(chomp_bytes(stdout)),
        }
    }
}

/// Executes svnlook subcommands against one repository snapshot
pub struct Invoker {
    repo: PathBuf,
    selector: Selector,
    runner: Box<dyn Runner>,
}

impl Invoker {
    /// Create an invoker bound to a repository and selector
    pub fn new(repo: impl Into<PathBuf>, selector: Selector, runner: Box<dyn Runner>) -> Self {
        Self {
            repo: repo.into(),
            selector,
            runner,
        }
    }

    /// Repository path
    pub fn repo(&self) -> &Path {
        &self.repo
    }

    /// Selector every selector-aware query is scoped to
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Full argument vector for a subcommand (program name excluded)
    pub fn command_args(&self, subcommand: &str, extra: &[&str]) -> Vec<String> {
        let mut args = vec![
            subcommand.to_string(),
            self.repo.to_string_lossy().into_owned(),
        ];

        if !SELECTOR_AGNOSTIC.contains(&subcommand) {
            args.extend(self.selector.to_args());
        }

        args.extend(extra.iter().map(|s| s.to_string()));
        args
    }

    /// Run a subcommand and shape its output
    pub fn invoke(&self, subcommand: &str, extra: &[&str], shape: Shape) -> LookResult<Output> {
        self.capture(subcommand, extra)
            .map(|stdout| Output::from_stdout(stdout, shape))
    }

    /// Run a subcommand in text mode
    pub fn text(&self, subcommand: &str, extra: &[&str]) -> LookResult<String> {
        self.capture(subcommand, extra).map(|stdout| chomp_text(&stdout))
    }

    /// Run a subcommand in line mode
    pub fn lines(&self, subcommand: &str, extra: &[&str]) -> LookResult<Vec<String>> {
        self.capture(subcommand, extra).map(|stdout| split_lines(&stdout))
    }

    /// Run a subcommand and keep its output as bytes
    pub fn bytes(&self, subcommand: &str, extra: &[&str]) -> LookResult<Vec<u8>> {
        self.capture(subcommand, extra).map(chomp_bytes)
    }

    /// Run a subcommand and return stdout untouched
    pub fn raw(&self, subcommand: &str, extra: &[&str]) -> LookResult<Vec<u8>> {
        self.capture(subcommand, extra)
    }

    fn capture(&self, subcommand: &str, extra: &[&str]) -> LookResult<Vec<u8>> {
        let args = self.command_args(subcommand, extra);
        self.runner.run(&args)
    }
}

/// Decode output and strip exactly one trailing newline.
///
/// Invalid UTF-8 is replaced with U+FFFD. A `\r` before the newline is
/// content and stays, matching [`chomp_bytes`].
fn chomp_text(stdout: &[u8]) -> String {
    String::from_utf8_lossy(chomp(stdout)).into_owned()
}

/// Split output on `\n` only, so every line keeps any `\r` it carried
fn split_lines(stdout: &[u8]) -> Vec<String> {
    if stdout.is_empty() {
        return Vec::new();
    }
    String::from_utf8_lossy(chomp(stdout))
        .split('\n')
        .map(str::to_string)
        .collect()
}

fn chomp(stdout: &[u8]) -> &[u8] {
    stdout.strip_suffix(b"\n").unwrap_or(stdout)
}

fn chomp_bytes(mut stdout: Vec<u8>) -> Vec<u8> {
    if stdout.last() == Some(&b'\n') {
        stdout.pop();
    }
    stdout
}
