//! svn-look - query a Subversion revision or transaction
//!
//! CLI entry point: builds a look session and prints one query result.

use clap::Parser;
use console::style;
use std::process::ExitCode;
use svn_look::cli::{output, query, Cli};
use svn_look::config::{Config, ConfigManager};
use svn_look::error::LookResult;
use svn_look::invoker::{parse_min_version, Selector, SvnlookRunner};
use svn_look::Look;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> LookResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_manager = if let Some(ref path) = cli.config {
        ConfigManager::with_path(path.clone())
    } else {
        ConfigManager::new()
    };
    let mut config = config_manager.load()?;

    init_logging(cli.verbose, &config);
    debug!("Configuration from {}", config_manager.path().display());

    if let Some(ref program) = cli.svnlook {
        config.svnlook.program = program.clone();
    }

    let runner = SvnlookRunner::new(config.svnlook.clone());
    if cli.skip_version_check {
        debug!("Skipping svnlook version check (--skip-version-check)");
    } else {
        let required = parse_min_version(&config.svnlook.min_version)?;
        runner.check_version(&required)?;
    }

    let look = match Selector::from_options(cli.revision, cli.transaction.clone())? {
        Some(selector) => Look::with_runner(&cli.repo, selector, Box::new(runner)),
        None => Look::at_youngest(&cli.repo, Box::new(runner))?,
    };

    let report = query::execute(&cli.command, &look)?;
    output::print(&report, cli.format)
}

/// Logs go to stderr so stdout carries only the query result.
/// 0 = warn, 1 = info, 2+ = debug
fn init_logging(verbose: u8, config: &Config) {
    let filter = match verbose {
        0 => EnvFilter::new("svn_look=warn"),
        1 => EnvFilter::new("svn_look=info"),
        _ => EnvFilter::new("svn_look=debug"),
    };

    if config.general.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .init();
    }
}
