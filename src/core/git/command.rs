use crate::core::probe::Probe;
use crate::utils::{Result, TidyError};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use tracing::debug;

/// What to do when a git invocation exits non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnFailure {
    Propagate,
    Empty,
}

pub trait GitExecutor {
    /// Runs `git <args>` and returns its trimmed standard output.
    fn output(&self, args: &[&str]) -> Result<String>;

    /// Runs `git <first> | git <second>` and returns the trimmed output of the second.
    fn pipe(&self, first: &[&str], second: &[&str]) -> Result<String>;

    fn run(&self, args: &[&str], on_failure: OnFailure) -> Result<String> {
        match self.output(args) {
            Ok(output) => Ok(output),
            Err(e) => match on_failure {
                OnFailure::Propagate => Err(e),
                OnFailure::Empty => {
                    debug!(error = %e, "treating failed git call as empty output");
                    Ok(String::new())
                }
            },
        }
    }

    fn probe(&self, args: &[&str]) -> Probe<String> {
        self.output(args).into()
    }

    fn succeeds(&self, args: &[&str]) -> bool {
        self.output(args).is_ok()
    }
}

/// Runs the `git` binary found on `PATH`.
#[derive(Debug, Clone)]
pub struct SystemGit {
    root: PathBuf,
}

impl SystemGit {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Output is parsed, so git's messages must stay untranslated.
    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new("git");
        cmd.current_dir(&self.root).args(args).env("LC_ALL", "C");
        cmd
    }
}

impl GitExecutor for SystemGit {
    fn output(&self, args: &[&str]) -> Result<String> {
        debug!(args = %args.join(" "), "git");

        let output = self
            .command(args)
            .output()
            .map_err(|e| TidyError::git_command(args, format!("failed to execute git: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TidyError::git_command(args, stderr.trim()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.trim().to_string())
    }

    fn pipe(&self, first: &[&str], second: &[&str]) -> Result<String> {
        debug!(
            producer = %first.join(" "),
            consumer = %second.join(" "),
            "git pipe"
        );

        let mut producer = self
            .command(first)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| TidyError::git_command(first, format!("failed to execute git: {e}")))?;

        let producer_stdout = producer
            .stdout
            .take()
            .ok_or_else(|| TidyError::git_command(first, "stdout was not captured"))?;

        let consumer = self
            .command(second)
            .stdin(Stdio::from(producer_stdout))
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| TidyError::git_command(second, format!("failed to execute git: {e}")))?;

        // Drained concurrently so a chatty producer cannot stall on a full pipe.
        let producer_stderr = producer.stderr.take();
        let stderr_reader = thread::spawn(move || {
            let mut buf = Vec::new();
            if let Some(mut stderr) = producer_stderr {
                let _ = stderr.read_to_end(&mut buf);
            }
            buf
        });

        let consumer_output = consumer.wait_with_output()?;
        let producer_status = producer.wait()?;
        let producer_stderr = stderr_reader.join().unwrap_or_default();

        if !producer_status.success() {
            let stderr = String::from_utf8_lossy(&producer_stderr);
            return Err(TidyError::git_command(first, stderr.trim()));
        }

        if !consumer_output.status.success() {
            let stderr = String::from_utf8_lossy(&consumer_output.stderr);
            return Err(TidyError::git_command(second, stderr.trim()));
        }

        let stdout = String::from_utf8_lossy(&consumer_output.stdout);
        Ok(stdout.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_is_trimmed() {
        let (temp_dir, _repo) = setup_test_repo();
        let git = SystemGit::new(temp_dir.path());

        let branch = git.output(&["rev-parse", "--abbrev-ref", "HEAD"]).unwrap();
        assert_eq!(branch, "main");
    }

    #[test]
    fn test_failure_policy() {
        let temp_dir = TempDir::new().unwrap();
        let git = SystemGit::new(temp_dir.path());

        let err = git
            .run(&["rev-parse", "--show-toplevel"], OnFailure::Propagate)
            .unwrap_err();
        assert!(matches!(err, TidyError::GitCommand { .. }));

        let empty = git
            .run(&["rev-parse", "--show-toplevel"], OnFailure::Empty)
            .unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_probe_reports_failure() {
        let temp_dir = TempDir::new().unwrap();
        let git = SystemGit::new(temp_dir.path());

        let probe = git.probe(&["branch"]);
        assert!(probe.is_failed());
        assert!(!git.succeeds(&["branch"]));
    }

    #[test]
    fn test_pipe_feeds_second_command() {
        let (temp_dir, _repo) = setup_test_repo();
        let git = SystemGit::new(temp_dir.path());

        let output = git
            .pipe(
                &["rev-list", "--objects", "--all"],
                &["cat-file", "--batch-check=%(objecttype) %(rest)"],
            )
            .unwrap();

        assert!(output.lines().any(|line| line == "blob README.md"));
        assert!(output.lines().any(|line| line.starts_with("commit")));
    }

    #[test]
    fn test_pipe_reports_producer_stderr() {
        let (temp_dir, _repo) = setup_test_repo();
        let git = SystemGit::new(temp_dir.path());

        let err = git
            .pipe(
                &["rev-list", "--objects", "no-such-ref"],
                &["cat-file", "--batch-check"],
            )
            .unwrap_err();

        match err {
            TidyError::GitCommand { command, message } => {
                assert_eq!(command, "git rev-list --objects no-such-ref");
                assert!(message.contains("no-such-ref"), "message: {message}");
            }
            other => panic!("Expected GitCommand, got {other:?}"),
        }
    }

    #[test]
    fn test_commands_pin_c_locale() {
        let git = SystemGit::new("/tmp");
        let cmd = git.command(&["branch", "-vv"]);

        let lc_all = cmd
            .get_envs()
            .find(|(key, _)| *key == "LC_ALL")
            .and_then(|(_, value)| value);
        assert_eq!(lc_all, Some(std::ffi::OsStr::new("C")));
    }
}
