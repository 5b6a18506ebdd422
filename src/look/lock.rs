//! Parsing of `svnlook lock` and svnlook timestamps

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use tracing::debug;

/// A lock held on a repository path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LockInfo {
    /// Opaque lock token
    pub token: String,
    /// User holding the lock
    pub owner: String,
    /// Creation timestamp as printed by svnlook
    pub created: String,
    /// Expiry timestamp, if the lock expires
    pub expires: Option<String>,
    /// Free-text comment; may span lines
    pub comment: String,
}

impl LockInfo {
    /// Creation time, if it could be parsed
    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        parse_svn_date(&self.created)
    }
}

/// Parse lock output. No output means the path is not locked.
///
/// ```text
/// UUID Token: opaquelocktoken:0f9a3c1e-...
/// Owner: harry
/// Created: 2005-07-08 17:27:36 -0500 (Fri, 08 Jul 2005)
/// Expires:
/// Comment (1 line):
/// Rework the uploading software.
/// ```
pub fn parse_lock<S: AsRef<str>>(lines: &[S]) -> Option<LockInfo> {
    if lines.is_empty() {
        return None;
    }

    let mut lock = LockInfo::default();
    for (i, line) in lines.iter().enumerate() {
        let Some((key, value)) = line.as_ref().split_once(':') else {
            continue;
        };
        let value = value.trim_start().to_string();

        if key.starts_with("Comment") {
            let body: Vec<&str> = lines[i + 1..].iter().map(|l| l.as_ref()).collect();
            lock.comment = body.join("\n");
            break;
        }

        match key {
            "UUID Token" => lock.token = value,
            "Owner" => lock.owner = value,
            "Created" => lock.created = value,
            "Expires" => lock.expires = Some(value).filter(|v| !v.is_empty()),
            other => debug!("Ignoring lock field {:?}", other),
        }
    }

    Some(lock)
}

/// Parse a timestamp such as `2005-07-08 17:27:36 -0500 (Fri, 08 Jul 2005)`.
///
/// The parenthesised human-readable suffix is optional.
pub fn parse_svn_date(text: &str) -> Option<DateTime<FixedOffset>> {
    let stamp = text.split(" (").next().unwrap_or(text).trim();
    DateTime::parse_from_str(stamp, "%Y-%m-%d %H:%M:%S %z").ok()
}
