//! Parsing of `svnlook changed --copy-info`
//!
//! Each record carries a four byte status prefix followed by the path:
//!
//! ```text
//! A + trunk/new.txt
//!     (from trunk/old.txt:r5)
//! U   trunk/readme
//! _U  trunk/
//! D   trunk/gone.c
//! ```
//!
//! Byte 0 is the content action (`A`, `D`, `U`), byte 1 is `U` when
//! properties changed, bytes 2-3 are ignored. Copy annotations follow the
//! `A` record of the copy destination directly.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::warn;

static COPY_FROM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(from (.+):r(\d+)\)$").expect("copy annotation pattern is valid")
});

/// Width of the status prefix preceding the path
const PREFIX_LEN: usize = 4;

/// Origin of a copied or renamed path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopySource {
    /// Path the copy was made from
    pub path: String,
    /// Revision of the source path
    pub revision: u64,
}

/// Paths touched by one revision or transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChangeSet {
    added: Vec<String>,
    deleted: Vec<String>,
    updated: Vec<String>,
    prop_modified: Vec<String>,
    copied: Vec<(String, CopySource)>,
    changed: Vec<String>,
}

impl ChangeSet {
    pub fn added(&self) -> &[String] {
        &self.added
    }

    pub fn deleted(&self) -> &[String] {
        &self.deleted
    }

    pub fn updated(&self) -> &[String] {
        &self.updated
    }

    /// Paths whose properties changed, regardless of content changes
    pub fn prop_modified(&self) -> &[String] {
        &self.prop_modified
    }

    /// `added`, `updated`, `deleted` and `prop_modified`, concatenated in that order
    pub fn changed(&self) -> &[String] {
        &self.changed
    }

    /// Copy destinations with their sources, in the order they were added
    pub fn copied(&self) -> &[(String, CopySource)] {
        &self.copied
    }

    /// Source of a copied path, if `path` was copied
    pub fn copy_source(&self, path: &str) -> Option<&CopySource> {
        self.copied
            .iter()
            .find(|(to, _)| to == path)
            .map(|(_, source)| source)
    }

    /// Copy destinations
    pub fn copied_to(&self) -> Vec<String> {
        self.copied.iter().map(|(to, _)| to.clone()).collect()
    }

    /// Copy source paths, parallel to [`ChangeSet::copied_to`]
    pub fn copied_from(&self) -> Vec<String> {
        self.copied
            .iter()
            .map(|(_, source)| source.path.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.changed.is_empty()
    }
}

/// Build a changeset from the lines of `svnlook changed --copy-info`.
///
/// Records of four bytes or less carry no path and are skipped.
pub fn parse_changed<S: AsRef<str>>(lines: &[S]) -> ChangeSet {
    let mut set = ChangeSet::default();

    for line in lines {
        let line = line.as_ref();
        if line.len() <= PREFIX_LEN {
            continue;
        }
        let Some(path) = line.get(PREFIX_LEN..) else {
            warn!("Skipping change record with a non-ASCII prefix: {:?}", line);
            continue;
        };
        let path = path.trim_end().to_string();
        let bytes = line.as_bytes();

        match bytes[0] {
            b'A' => set.added.push(path.clone()),
            b'D' => set.deleted.push(path.clone()),
            b'U' => set.updated.push(path.clone()),
            _ => record_copy(&mut set, line),
        }

        if bytes[1] == b'U' {
            set.prop_modified.push(path);
        }
    }

    set.changed = set
        .added
        .iter()
        .chain(&set.updated)
        .chain(&set.deleted)
        .chain(&set.prop_modified)
        .cloned()
        .collect();
    set
}

fn record_copy(set: &mut ChangeSet, line: &str) {
    let Some(caps) = COPY_FROM.captures(line.trim()) else {
        return;
    };
    let Ok(revision) = caps[2].parse::<u64>() else {
        warn!("Ignoring copy annotation with bad revision: {:?}", line);
        return;
    };
    let Some(to) = set.added.last() else {
        warn!("Ignoring copy annotation with no added path: {:?}", line);
        return;
    };

    let source = CopySource {
        path: caps[1].to_string(),
        revision,
    };
    let to = to.clone();
    match set.copied.iter_mut().find(|(path, _)| *path == to) {
        Some(entry) => entry.1 = source,
        None => set.copied.push((to, source)),
    }
}
