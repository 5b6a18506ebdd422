//! Rendering of query results

use crate::cli::args::OutputFormat;
use crate::error::{LookError, LookResult};
use crate::look::{ChangeSet, LockInfo, PropertyList};
use std::io::Write;
use std::sync::Arc;

/// Result of one query, ready to print
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Text(String),
    Lines(Vec<String>),
    /// Unshaped stdout, printed verbatim
    Bytes(Vec<u8>),
    Number(u64),
    Changes(Arc<ChangeSet>),
    Props(PropertyList),
    Lock(Option<LockInfo>),
}

/// Write a report to stdout
pub fn print(report: &Report, format: OutputFormat) -> LookResult<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let rendered = match format {
        OutputFormat::Plain => render_plain(report),
        OutputFormat::Json => {
            let mut json = render_json(report)?;
            json.push('\n');
            json.into_bytes()
        }
    };

    out.write_all(&rendered)
        .and_then(|()| out.flush())
        .map_err(|e| LookError::io("writing output", e))
}

/// Plain rendering, restoring the trailing newline the invoker removed
pub fn render_plain(report: &Report) -> Vec<u8> {
    let mut buf = Vec::new();
    match report {
        Report::Text(text) => {
            buf.extend_from_slice(text.as_bytes());
            buf.push(b'\n');
        }
        Report::Lines(lines) => {
            for line in lines {
                buf.extend_from_slice(line.as_bytes());
                buf.push(b'\n');
            }
        }
        Report::Bytes(bytes) => buf.extend_from_slice(bytes),
        Report::Number(n) => buf.extend_from_slice(format!("{}\n", n).as_bytes()),
        Report::Changes(set) => buf.extend_from_slice(changes_plain(set).as_bytes()),
        Report::Props(props) => {
            for (name, value) in props {
                buf.extend_from_slice(format!("  {} : {}\n", name, value).as_bytes());
            }
        }
        Report::Lock(Some(lock)) => buf.extend_from_slice(lock_plain(lock).as_bytes()),
        Report::Lock(None) => {}
    }
    buf
}

fn changes_plain(set: &ChangeSet) -> String {
    let mut text = String::new();
    for path in set.added() {
        text.push_str(&format!("A   {}\n", path));
        if let Some(source) = set.copy_source(path) {
            text.push_str(&format!("    (from {}:r{})\n", source.path, source.revision));
        }
    }
    for path in set.updated() {
        text.push_str(&format!("U   {}\n", path));
    }
    for path in set.deleted() {
        text.push_str(&format!("D   {}\n", path));
    }
    for path in set.prop_modified() {
        text.push_str(&format!("_U  {}\n", path));
    }
    text
}

fn lock_plain(lock: &LockInfo) -> String {
    format!(
        "UUID Token: {}\nOwner: {}\nCreated: {}\nExpires: {}\nComment:\n{}\n",
        lock.token,
        lock.owner,
        lock.created,
        lock.expires.as_deref().unwrap_or(""),
        lock.comment
    )
}

/// JSON rendering
pub fn render_json(report: &Report) -> LookResult<String> {
    let json = match report {
        Report::Text(text) => serde_json::to_string_pretty(text)?,
        Report::Lines(lines) => serde_json::to_string_pretty(lines)?,
        Report::Bytes(bytes) => serde_json::to_string_pretty(&String::from_utf8_lossy(bytes))?,
        Report::Number(n) => serde_json::to_string_pretty(n)?,
        Report::Changes(set) => serde_json::to_string_pretty(set.as_ref())?,
        Report::Props(props) => serde_json::to_string_pretty(props)?,
        Report::Lock(lock) => serde_json::to_string_pretty(lock)?,
    };
    Ok(json)
}
