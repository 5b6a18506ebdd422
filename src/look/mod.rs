//! Caching session over one repository snapshot
//!
//! A [`Look`] is bound to a repository and a [`Selector`]. Every cached
//! accessor runs svnlook on first use only; the changed-path views all share
//! one parsed [`ChangeSet`]. Locks, diffs, trees, file contents and single
//! properties are fetched fresh on every call.
//!
//! # Example
//!
//! ```no_run
//! use svn_look::config::SvnlookConfig;
//! use svn_look::invoker::Selector;
//! use svn_look::Look;
//!
//! let config = SvnlookConfig::default();
//! let look = Look::new("/srv/svn/repo", Selector::Transaction("41-1a".into()), &config);
//! for path in look.added()? {
//!     println!("added {}", path);
//! }
//! # Ok::<(), svn_look::LookError>(())
//! ```

mod cache;
mod changes;
mod lock;
mod options;
mod props;

pub use changes::{parse_changed, ChangeSet, CopySource};
pub use lock::{parse_lock, parse_svn_date, LockInfo};
pub use options::{DiffOptions, TreeOptions};
pub use props::{parse_proplist, PropertyList};

use crate::config::SvnlookConfig;
use crate::error::{LookError, LookResult};
use crate::invoker::{Invoker, Runner, Selector, SvnlookRunner};
use cache::{KeyedSlot, Slot};
use chrono::{DateTime, FixedOffset};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Caching handle bound to one repository and one revision or transaction
pub struct Look {
    invoker: Invoker,
    author: Slot<String>,
    log_msg: Slot<String>,
    date: Slot<String>,
    info: Slot<String>,
    dirs_changed: Slot<Vec<String>>,
    changes: Slot<Arc<ChangeSet>>,
    proplists: KeyedSlot<String, PropertyList>,
}

impl Look {
    /// Create a session that runs the configured svnlook binary
    pub fn new(repo: impl Into<PathBuf>, selector: Selector, config: &SvnlookConfig) -> Self {
        Self::with_runner(repo, selector, Box::new(SvnlookRunner::new(config.clone())))
    }

    /// Create a session over any runner
    pub fn with_runner(
        repo: impl Into<PathBuf>,
        selector: Selector,
        runner: Box<dyn Runner>,
    ) -> Self {
        let invoker = Invoker::new(repo, selector, runner);
        debug!(
            "Opened look at {} ({})",
            invoker.repo().display(),
            invoker.selector()
        );

        Self {
            invoker,
            author: Slot::new("author"),
            log_msg: Slot::new("log"),
            date: Slot::new("date"),
            info: Slot::new("info"),
            dirs_changed: Slot::new("dirs-changed"),
            changes: Slot::new("changed"),
            proplists: KeyedSlot::new("proplist"),
        }
    }

    /// Create a session at the repository's youngest revision
    pub fn at_youngest(repo: impl Into<PathBuf>, runner: Box<dyn Runner>) -> LookResult<Self> {
        let repo = repo.into();
        let args = ["youngest".to_string(), repo.to_string_lossy().into_owned()];
        let stdout = runner.run(&args)?;
        let rev = parse_number("youngest", &String::from_utf8_lossy(&stdout))?;
        Ok(Self::with_runner(repo, Selector::Revision(rev), runner))
    }

    pub fn repo(&self) -> &Path {
        self.invoker.repo()
    }

    pub fn selector(&self) -> &Selector {
        self.invoker.selector()
    }

    /// Transaction name, for sessions opened on a transaction
    pub fn txn(&self) -> Option<&str> {
        self.invoker.selector().transaction()
    }

    /// Revision number, for sessions opened on a revision
    pub fn rev(&self) -> Option<u64> {
        self.invoker.selector().revision()
    }

    /// Underlying invoker, for subcommands without a dedicated accessor
    pub fn invoker(&self) -> &Invoker {
        &self.invoker
    }

    pub fn author(&self) -> LookResult<String> {
        self.author.get_or_try_init(|| self.invoker.text("author", &[]))
    }

    /// Log message, with one trailing newline removed
    pub fn log_msg(&self) -> LookResult<String> {
        self.log_msg.get_or_try_init(|| self.invoker.text("log", &[]))
    }

    /// Commit date as printed by svnlook
    pub fn date(&self) -> LookResult<String> {
        self.date.get_or_try_init(|| self.invoker.text("date", &[]))
    }

    /// Commit date parsed into a timestamp.
    ///
    /// Transactions that have no date yet yield `None`.
    pub fn date_time(&self) -> LookResult<Option<DateTime<FixedOffset>>> {
        let date = self.date()?;
        if date.trim().is_empty() {
            return Ok(None);
        }
        parse_svn_date(&date)
            .map(Some)
            .ok_or_else(|| LookError::parse("date", format!("unrecognised timestamp {:?}", date)))
    }

    /// Author, date, log size and log message in one block
    pub fn info(&self) -> LookResult<String> {
        self.info.get_or_try_init(|| self.invoker.text("info", &[]))
    }

    /// Directories whose entries or properties changed
    pub fn dirs_changed(&self) -> LookResult<Vec<String>> {
        self.dirs_changed.get_or_try_init(|| self.invoker.lines("dirs-changed", &[]))
    }

    /// Parsed `changed --copy-info` listing, shared by all path views
    pub fn changed_hash(&self) -> LookResult<Arc<ChangeSet>> {
        self.changes.get_or_try_init(|| {
            let lines = self.invoker.lines("changed", &["--copy-info"])?;
            let set = parse_changed(lines.as_slice());
            debug!(
                "{} changed paths ({} added, {} copied)",
                set.changed().len(),
                set.added().len(),
                set.copied().len()
            );
            Ok(Arc::new(set))
        })
    }

    pub fn added(&self) -> LookResult<Vec<String>> {
        Ok(self.changed_hash()?.added().to_vec())
    }

    pub fn updated(&self) -> LookResult<Vec<String>> {
        Ok(self.changed_hash()?.updated().to_vec())
    }

    pub fn deleted(&self) -> LookResult<Vec<String>> {
        Ok(self.changed_hash()?.deleted().to_vec())
    }

    pub fn prop_modified(&self) -> LookResult<Vec<String>> {
        Ok(self.changed_hash()?.prop_modified().to_vec())
    }

    /// Every changed path: added, updated, deleted, then property changes
    pub fn changed(&self) -> LookResult<Vec<String>> {
        Ok(self.changed_hash()?.changed().to_vec())
    }

    /// Sources of copied paths
    pub fn copied_from(&self) -> LookResult<Vec<String>> {
        Ok(self.changed_hash()?.copied_from())
    }

    /// Destinations of copied paths
    pub fn copied_to(&self) -> LookResult<Vec<String>> {
        Ok(self.changed_hash()?.copied_to())
    }

    /// Copy source of one destination path
    pub fn copy_source(&self, path: &str) -> LookResult<Option<CopySource>> {
        Ok(self.changed_hash()?.copy_source(path).cloned())
    }

    /// File contents with one trailing newline removed.
    ///
    /// Decoding is lossy: bytes that are not valid UTF-8 become U+FFFD. Use
    /// [`Look::cat_bytes`] when the file may be binary.
    pub fn cat(&self, path: &str) -> LookResult<String> {
        self.invoker.text("cat", &[path])
    }

    /// File contents split into lines
    pub fn cat_lines(&self, path: &str) -> LookResult<Vec<String>> {
        self.invoker.lines("cat", &[path])
    }

    /// File contents as raw bytes, for files that are not UTF-8
    pub fn cat_bytes(&self, path: &str) -> LookResult<Vec<u8>> {
        self.invoker.bytes("cat", &[path])
    }

    /// File contents exactly as svnlook printed them
    pub fn cat_raw(&self, path: &str) -> LookResult<Vec<u8>> {
        self.invoker.raw("cat", &[path])
    }

    /// Unified diff of the changes
    pub fn diff(&self, opts: &DiffOptions) -> LookResult<String> {
        self.invoker.text("diff", &opts.to_args())
    }

    /// Size of a file in bytes
    pub fn filesize(&self, path: &str) -> LookResult<u64> {
        let text = self.invoker.text("filesize", &[path])?;
        parse_number("filesize", &text)
    }

    /// Lock on a path, or `None` when the path is not locked.
    ///
    /// Lock state can change at any time, so this is never cached.
    pub fn lock(&self, path: &str) -> LookResult<Option<LockInfo>> {
        let lines = self.invoker.lines("lock", &[path])?;
        Ok(parse_lock(lines.as_slice()))
    }

    /// Value of a single property, with one trailing newline removed.
    ///
    /// Decoding is lossy like [`Look::cat`]. Binary property values should be
    /// read through `invoker().bytes("propget", ..)`.
    pub fn propget(&self, name: &str, path: &str) -> LookResult<String> {
        self.invoker.text("propget", &[name, path])
    }

    /// All properties of a path, cached per path
    pub fn proplist(&self, path: &str) -> LookResult<PropertyList> {
        self.proplists.get_or_try_init(&path.to_string(), || {
            let text = self.invoker.text("proplist", &["--verbose", path])?;
            Ok(parse_proplist(&text))
        })
    }

    /// Directory tree listing, rooted at `path` when given
    pub fn tree(&self, path: Option<&str>, opts: &TreeOptions) -> LookResult<String> {
        let mut args = opts.to_args();
        if let Some(path) = path {
            args.push(path);
        }
        self.invoker.text("tree", &args)
    }

    /// Repository UUID
    pub fn uuid(&self) -> LookResult<String> {
        self.invoker.text("uuid", &[])
    }

    /// Youngest revision in the repository
    pub fn youngest(&self) -> LookResult<u64> {
        let text = self.invoker.text("youngest", &[])?;
        parse_number("youngest", &text)
    }
}

fn parse_number(query: &str, text: &str) -> LookResult<u64> {
    text.trim()
        .parse()
        .map_err(|_| LookError::parse(query, format!("expected a number, got {:?}", text)))
}
