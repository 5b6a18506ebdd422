//! Flags accepted by the diff and tree queries

/// Options for `svnlook diff`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffOptions {
    /// Do not print differences for deleted files
    pub no_diff_deleted: bool,
    /// Do not print differences for added files
    pub no_diff_added: bool,
    /// Diff copied files against their copy source
    pub diff_copy_from: bool,
}

impl DiffOptions {
    pub fn to_args(&self) -> Vec<&'static str> {
        let mut args = Vec::new();
        if self.no_diff_deleted {
            args.push("--no-diff-deleted");
        }
        if self.no_diff_added {
            args.push("--no-diff-added");
        }
        if self.diff_copy_from {
            args.push("--diff-copy-from");
        }
        args
    }
}

/// Options for `svnlook tree`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeOptions {
    /// Print full paths instead of indenting
    pub full_paths: bool,
    /// Print node revision ids
    pub show_ids: bool,
    /// List only the given directory
    pub non_recursive: bool,
}

impl TreeOptions {
    pub fn to_args(&self) -> Vec<&'static str> {
        let mut args = Vec::new();
        if self.full_paths {
            args.push("--full-paths");
        }
        if self.show_ids {
            args.push("--show-ids");
        }
        if self.non_recursive {
            args.push("--non-recursive");
        }
        args
    }
}
