//! Configuration schema for svn-look
//!
//! Configuration is stored at `~/.config/svn-look/config.toml`

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// How svnlook is invoked
    pub svnlook: SvnlookConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
        }
    }
}

/// svnlook invocation settings
///
/// These are applied to each child process only; the environment of the
/// calling process is left alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvnlookConfig {
    /// Program name or absolute path
    pub program: String,

    /// Locale exported as LC_ALL so output is not translated
    pub locale: Option<String>,

    /// PATH override for the child process
    pub path: Option<String>,

    /// Oldest svnlook release accepted at startup
    pub min_version: String,
}

impl Default for SvnlookConfig {
    fn default() -> Self {
        Self {
            program: "svnlook".to_string(),
            locale: Some("C".to_string()),
            path: None,
            min_version: "1.4.0".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.general.log_format, "text");
        assert_eq!(config.svnlook.program, "svnlook");
        assert_eq!(config.svnlook.locale.as_deref(), Some("C"));
        assert_eq!(config.svnlook.min_version, "1.4.0");
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [svnlook]
            program = "/opt/svn/bin/svnlook"
            "#,
        )
        .unwrap();

        assert_eq!(config.svnlook.program, "/opt/svn/bin/svnlook");
        assert_eq!(config.svnlook.locale.as_deref(), Some("C"));
        assert_eq!(config.general.log_format, "text");
    }
}
