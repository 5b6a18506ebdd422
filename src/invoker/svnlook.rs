//! svnlook subprocess runner
//!
//! Implements the Runner trait by spawning the configured svnlook binary
//! with the standard library process API.

use crate::config::SvnlookConfig;
use crate::error::{LookError, LookResult};
use crate::invoker::runner::Runner;
use semver::Version;
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Runner that executes a real svnlook binary
#[derive(Debug, Clone)]
pub struct SvnlookRunner {
    config: SvnlookConfig,
}

impl SvnlookRunner {
    /// Create a runner from invocation settings
    pub fn new(config: SvnlookConfig) -> Self {
        Self { config }
    }

    /// Invocation settings in use
    pub fn config(&self) -> &SvnlookConfig {
        &self.config
    }

    /// Build the child command with the configured environment
    fn command(&self, args: &[String]) -> Command {
        let mut cmd = Command::new(&self.config.program);
        cmd.args(args);

        if let Some(ref locale) = self.config.locale {
            cmd.env("LC_ALL", locale);
        }
        if let Some(ref path) = self.config.path {
            cmd.env("PATH", path);
        }

        // stderr is left attached to ours so svnlook diagnostics reach the operator
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());
        cmd
    }

    fn describe(&self, args: &[String]) -> String {
        let mut line = self.config.program.clone();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    /// Ask svnlook for its version and fail if it is older than `required`
    pub fn check_version(&self, required: &Version) -> LookResult<Version> {
        let args = ["--version".to_string(), "--quiet".to_string()];
        let stdout = self.run(&args)?;
        let found = parse_version(&String::from_utf8_lossy(&stdout))?;

        if found < *required {
            return Err(LookError::UnsupportedVersion {
                found,
                required: required.clone(),
            });
        }

        info!("Using {} {}", self.config.program, found);
        Ok(found)
    }
}

impl Default for SvnlookRunner {
    fn default() -> Self {
        Self::new(SvnlookConfig::default())
    }
}

impl Runner for SvnlookRunner {
    fn run(&self, args: &[String]) -> LookResult<Vec<u8>> {
        debug!("Executing: {} {:?}", self.config.program, args);

        let output = self
            .command(args)
            .output()
            .map_err(|e| LookError::spawn_failed(self.describe(args), e))?;

        if output.status.success() {
            return Ok(output.stdout);
        }

        match output.status.code() {
            Some(code) => Err(LookError::CommandFailed {
                command: self.describe(args),
                code,
            }),
            None => Err(LookError::ProcessSignaled {
                command: self.describe(args),
            }),
        }
    }
}

/// Parse the output of `svnlook --version --quiet`.
///
/// Older releases append a build tag after the number, e.g. `1.6.11 (r934486)`.
pub fn parse_version(text: &str) -> LookResult<Version> {
    let token = text
        .split_whitespace()
        .next()
        .ok_or_else(|| LookError::VersionUnparseable(text.to_string()))?;

    Version::parse(token).map_err(|_| LookError::VersionUnparseable(token.to_string()))
}

/// Parse a configured minimum version string
pub fn parse_min_version(text: &str) -> LookResult<Version> {
    Version::parse(text.trim()).map_err(|_| LookError::VersionUnparseable(text.to_string()))
}
