//! Dispatch of one CLI query onto a look session

use crate::cli::args::Commands;
use crate::cli::output::Report;
use crate::error::LookResult;
use crate::look::{DiffOptions, Look, TreeOptions};

/// Run the requested query
pub fn execute(command: &Commands, look: &Look) -> LookResult<Report> {
    let report = match command {
        Commands::Author => Report::Text(look.author()?),
        Commands::Log => Report::Text(look.log_msg()?),
        Commands::Date => Report::Text(look.date()?),
        Commands::Info => Report::Text(look.info()?),
        Commands::Changed => Report::Lines(look.changed()?),
        Commands::Changes => Report::Changes(look.changed_hash()?),
        Commands::Added => Report::Lines(look.added()?),
        Commands::Updated => Report::Lines(look.updated()?),
        Commands::Deleted => Report::Lines(look.deleted()?),
        Commands::PropModified => Report::Lines(look.prop_modified()?),
        Commands::CopiedFrom => Report::Lines(look.copied_from()?),
        Commands::CopiedTo => Report::Lines(look.copied_to()?),
        Commands::DirsChanged => Report::Lines(look.dirs_changed()?),
        Commands::Cat { path } => Report::Bytes(look.cat_raw(path)?),
        Commands::Diff(args) => {
            let opts = DiffOptions {
                no_diff_deleted: args.no_diff_deleted,
                no_diff_added: args.no_diff_added,
                diff_copy_from: args.diff_copy_from,
            };
            Report::Text(look.diff(&opts)?)
        }
        Commands::Filesize { path } => Report::Number(look.filesize(path)?),
        Commands::Lock { path } => Report::Lock(look.lock(path)?),
        Commands::Propget { name, path } => Report::Text(look.propget(name, path)?),
        Commands::Proplist { path } => Report::Props(look.proplist(path)?),
        Commands::Tree(args) => {
            let opts = TreeOptions {
                full_paths: args.full_paths,
                show_ids: args.show_ids,
                non_recursive: args.non_recursive,
            };
            Report::Text(look.tree(args.path.as_deref(), &opts)?)
        }
        Commands::Uuid => Report::Text(look.uuid()?),
        Commands::Youngest => Report::Number(look.youngest()?),
    };

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoker::{ScriptedRunner, Selector};

    fn look(runner: &ScriptedRunner) -> Look {
        Look::with_runner("/repo", Selector::Revision(3), Box::new(runner.clone()))
    }

    #[test]
    fn changed_reports_lines() {
        let runner = ScriptedRunner::new().respond("changed", "A   a\nD   b\n");
        let report = execute(&Commands::Changed, &look(&runner)).unwrap();
        assert_eq!(
            report,
            Report::Lines(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn youngest_reports_number() {
        let runner = ScriptedRunner::new().respond("youngest", "8\n");
        let report = execute(&Commands::Youngest, &look(&runner)).unwrap();
        assert_eq!(report, Report::Number(8));
    }

    #[test]
    fn unlocked_path() {
        let report = execute(
            &Commands::Lock {
                path: "a".to_string(),
            },
            &look(&ScriptedRunner::new()),
        )
        .unwrap();
        assert_eq!(report, Report::Lock(None));
    }
}
