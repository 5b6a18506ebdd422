//! CLI argument definitions using clap derive

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// svn-look - query a Subversion revision or transaction
///
/// Runs svnlook against REPO and prints the result of one query. Intended
/// for use from repository hook scripts.
#[derive(Parser, Debug)]
#[command(name = "svn-look")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the repository
    pub repo: PathBuf,

    /// Revision to look at (defaults to the youngest)
    #[arg(short = 'r', long)]
    pub revision: Option<u64>,

    /// Transaction to look at, e.g. from a pre-commit hook
    #[arg(short = 't', long)]
    pub transaction: Option<String>,

    /// Query to run
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "SVN_LOOK_CONFIG")]
    pub config: Option<PathBuf>,

    /// svnlook program to run, overriding the config file
    #[arg(long, global = true)]
    pub svnlook: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Do not check the svnlook version before running
    #[arg(long, global = true)]
    pub skip_version_check: bool,
}

/// Available queries
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the author
    Author,

    /// Print the log message
    Log,

    /// Print the commit date
    Date,

    /// Print author, date, log size and log message
    Info,

    /// Print every changed path
    Changed,

    /// Print the full changeset with status codes and copy sources
    Changes,

    /// Print added paths
    Added,

    /// Print modified paths
    Updated,

    /// Print deleted paths
    Deleted,

    /// Print paths whose properties changed
    PropModified,

    /// Print sources of copied paths
    CopiedFrom,

    /// Print destinations of copied paths
    CopiedTo,

    /// Print changed directories
    DirsChanged,

    /// Print the contents of a file
    Cat {
        /// Path inside the repository
        path: String,
    },

    /// Print a unified diff of the changes
    Diff(DiffArgs),

    /// Print the size of a file in bytes
    Filesize {
        /// Path inside the repository
        path: String,
    },

    /// Print lock information for a path
    Lock {
        /// Path inside the repository
        path: String,
    },

    /// Print the value of one property
    Propget {
        /// Property name
        name: String,
        /// Path inside the repository
        path: String,
    },

    /// Print all properties of a path
    Proplist {
        /// Path inside the repository
        path: String,
    },

    /// Print the directory tree
    Tree(TreeArgs),

    /// Print the repository UUID
    Uuid,

    /// Print the youngest revision number
    Youngest,
}

/// Arguments for the diff query
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Do not print differences for deleted files
    #[arg(long)]
    pub no_diff_deleted: bool,

    /// Do not print differences for added files
    #[arg(long)]
    pub no_diff_added: bool,

    /// Diff copied files against their copy source
    #[arg(long)]
    pub diff_copy_from: bool,
}

/// Arguments for the tree query
#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Directory to start from
    pub path: Option<String>,

    /// Print full paths instead of indenting
    #[arg(long)]
    pub full_paths: bool,

    /// Print node revision ids
    #[arg(long)]
    pub show_ids: bool,

    /// List only the given directory
    #[arg(short = 'N', long)]
    pub non_recursive: bool,
}

/// Output format for query results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Text as svnlook would print it
    #[default]
    Plain,
    /// JSON output
    Json,
}
