//! Integration tests for svn-look
//!
//! Most tests drive the binary against a fake `svnlook` shell script that
//! prints canned output and records its arguments.

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;

    fn svn_look() -> Command {
        cargo_bin_cmd!("svn-look")
    }

    #[test]
    fn help_displays() {
        svn_look()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("query a Subversion revision"));
    }

    #[test]
    fn version_displays() {
        svn_look()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("svn-look"));
    }

    #[test]
    fn missing_svnlook_reports_hint() {
        svn_look()
            .args([
                "/tmp/repo",
                "-r",
                "1",
                "--svnlook",
                "/nonexistent/svnlook-for-tests",
                "author",
            ])
            .env("SVN_LOOK_CONFIG", "/nonexistent/svn-look.toml")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to run"))
            .stderr(predicate::str::contains("Hint:"));
    }
}

#[cfg(unix)]
mod fake_svnlook_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use svn_look::config::SvnlookConfig;
    use svn_look::invoker::{Selector, SvnlookRunner};
    use svn_look::{Look, LookError};
    use tempfile::TempDir;

    const FAKE_SVNLOOK: &str = r#"#!/bin/sh
echo "$*" >> "$(dirname "$0")/calls.log"
case "$1" in
  --version) echo "__VERSION__" ;;
  youngest) echo "1" ;;
  author) echo "jdoe" ;;
  log) printf 'log\n\n' ;;
  date) echo "2024-02-03 10:11:12 +0100 (Sat, 03 Feb 2024)" ;;
  changed) printf 'A   file\nA + copy\n    (from file:r1)\n_U  dir/\n' ;;
  proplist) printf '  svn:mime-type : text/plain\n' ;;
  cat)
    case "$*" in
      *bare) printf 'no newline' ;;
      *) printf 'hello\nworld\n' ;;
    esac ;;
  lock) ;;
  *) echo "svnlook: unknown subcommand $1" >&2; exit 1 ;;
esac
"#;

    struct Fixture {
        dir: TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            Self::with_version("1.14.2")
        }

        fn with_version(version: &str) -> Self {
            let dir = TempDir::new().unwrap();
            let script = dir.path().join("svnlook");
            fs::write(&script, FAKE_SVNLOOK.replace("__VERSION__", version)).unwrap();
            fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
            Self { dir }
        }

        fn program(&self) -> PathBuf {
            self.dir.path().join("svnlook")
        }

        fn repo(&self) -> PathBuf {
            self.dir.path().join("repo")
        }

        fn calls(&self) -> Vec<String> {
            fs::read_to_string(self.dir.path().join("calls.log"))
                .unwrap_or_default()
                .lines()
                .map(str::to_string)
                .collect()
        }

        fn cmd(&self) -> Command {
            let mut cmd = cargo_bin_cmd!("svn-look");
            cmd.arg(self.repo())
                .arg("--svnlook")
                .arg(self.program())
                .env("SVN_LOOK_CONFIG", self.dir.path().join("absent.toml"));
            cmd
        }

        fn look(&self, selector: Selector) -> Look {
            let config = SvnlookConfig {
                program: self.program().to_string_lossy().into_owned(),
                ..SvnlookConfig::default()
            };
            Look::new(self.repo(), selector, &config)
        }
    }

    fn repo_arg(path: &Path) -> String {
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn author_at_revision() {
        let fx = Fixture::new();
        fx.cmd()
            .args(["-r", "1", "author"])
            .assert()
            .success()
            .stdout("jdoe\n");

        let repo = repo_arg(&fx.repo());
        let calls = fx.calls();
        assert_eq!(calls[0], "--version --quiet");
        assert_eq!(calls[1], format!("author {} -r 1", repo));
    }

    #[test]
    fn defaults_to_youngest_revision() {
        let fx = Fixture::new();
        fx.cmd().arg("log").assert().success().stdout("log\n\n");

        let repo = repo_arg(&fx.repo());
        let calls = fx.calls();
        assert!(calls.contains(&format!("youngest {}", repo)));
        assert!(calls.contains(&format!("log {} -r 1", repo)));
    }

    #[test]
    fn transaction_selector() {
        let fx = Fixture::new();
        fx.cmd()
            .args(["-t", "1-1", "--skip-version-check", "added"])
            .assert()
            .success()
            .stdout("file\ncopy\n");

        let repo = repo_arg(&fx.repo());
        assert_eq!(
            fx.calls(),
            vec![format!("changed {} -t 1-1 --copy-info", repo)]
        );
    }

    #[test]
    fn copies_as_json() {
        let fx = Fixture::new();
        fx.cmd()
            .args(["-r", "1", "copied-from", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"file\""));
    }

    #[test]
    fn cat_prints_file_verbatim() {
        let fx = Fixture::new();
        fx.cmd()
            .args(["-r", "1", "cat", "file"])
            .assert()
            .success()
            .stdout("hello\nworld\n");
        fx.cmd()
            .args(["-r", "1", "cat", "bare"])
            .assert()
            .success()
            .stdout("no newline");
    }

    #[test]
    fn proplist_as_json() {
        let fx = Fixture::new();
        fx.cmd()
            .args(["-r", "1", "--format", "json", "proplist", "file"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"svn:mime-type\": \"text/plain\""));
    }

    #[test]
    fn unlocked_path_is_not_an_error() {
        let fx = Fixture::new();
        fx.cmd()
            .args(["-r", "1", "--format", "json", "lock", "file"])
            .assert()
            .success()
            .stdout("null\n");

        let repo = repo_arg(&fx.repo());
        assert!(fx.calls().contains(&format!("lock {} file", repo)));
    }

    #[test]
    fn both_selectors_rejected() {
        let fx = Fixture::new();
        fx.cmd()
            .args(["-r", "1", "-t", "1-1", "author"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("cannot both be selected"));
    }

    #[test]
    fn failing_subcommand_reports_exit_code() {
        let fx = Fixture::new();
        fx.cmd()
            .args(["-r", "1", "filesize", "file"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("svnlook: unknown subcommand filesize"))
            .stderr(predicate::str::contains("exit code: 1"));
    }

    #[test]
    fn old_svnlook_rejected() {
        let fx = Fixture::with_version("1.3.2");
        fx.cmd()
            .args(["-r", "1", "author"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("too old"));
        assert_eq!(fx.calls(), vec!["--version --quiet"]);
    }

    #[test]
    fn session_end_to_end() {
        let fx = Fixture::new();
        let look = fx.look(Selector::Revision(1));

        assert_eq!(look.author().unwrap(), "jdoe");
        assert_eq!(look.log_msg().unwrap(), "log\n");
        assert_eq!(look.added().unwrap(), ["file", "copy"]);
        assert_eq!(look.prop_modified().unwrap(), ["dir/"]);
        assert_eq!(look.copied_to().unwrap(), ["copy"]);
        assert_eq!(look.cat("file").unwrap(), "hello\nworld");
        assert_eq!(look.cat_lines("file").unwrap(), ["hello", "world"]);
        assert_eq!(look.lock("file").unwrap(), None);

        // Cached queries ran once each
        look.author().unwrap();
        look.changed().unwrap();
        let calls = fx.calls();
        assert_eq!(calls.iter().filter(|c| c.starts_with("author")).count(), 1);
        assert_eq!(calls.iter().filter(|c| c.starts_with("changed")).count(), 1);
    }

    #[test]
    fn session_surfaces_command_failure() {
        let fx = Fixture::new();
        let look = fx.look(Selector::Revision(1));

        match look.uuid().unwrap_err() {
            LookError::CommandFailed { code, .. } => assert_eq!(code, 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn version_probe() {
        let fx = Fixture::new();
        let runner = SvnlookRunner::new(SvnlookConfig {
            program: fx.program().to_string_lossy().into_owned(),
            ..SvnlookConfig::default()
        });
        let found = runner.check_version(&semver::Version::new(1, 4, 0)).unwrap();
        assert_eq!(found, semver::Version::new(1, 14, 2));
    }
}
