pub mod test_helpers {
    use crate::core::git::{GitExecutor, GitRepository};
    use crate::ui::Confirmer;
    use crate::utils::{Result, TidyError};
    use chrono::{DateTime, Utc};
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::fs;
    use std::path::Path;
    use std::process::Command;
    use tempfile::TempDir;

    pub fn setup_test_repo() -> (TempDir, GitRepository) {
        setup_test_repo_on_branch("main")
    }

    pub fn setup_test_repo_on_branch(initial_branch: &str) -> (TempDir, GitRepository) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repo_path = temp_dir.path();

        git(
            repo_path,
            &["init", "-q", &format!("--initial-branch={initial_branch}")],
        );
        git(repo_path, &["config", "user.name", "Test User"]);
        git(repo_path, &["config", "user.email", "test@example.com"]);
        git(repo_path, &["config", "commit.gpgsign", "false"]);

        commit_file(repo_path, "README.md", "# Test Repository", None);

        let repo = GitRepository::discover_from(repo_path).expect("Failed to discover repo");
        (temp_dir, repo)
    }

    /// Runs git in `path` and panics unless it succeeds.
    pub fn git(path: &Path, args: &[&str]) {
        let status = Command::new("git")
            .current_dir(path)
            .args(args)
            .status()
            .expect("Failed to run git");
        assert!(status.success(), "git {} failed", args.join(" "));
    }

    /// Writes `name` and commits it, optionally back-dating the commit.
    pub fn commit_file(path: &Path, name: &str, content: &str, date: Option<DateTime<Utc>>) {
        fs::write(path.join(name), content).expect("Failed to write file");
        git(path, &["add", name]);

        let mut commit = Command::new("git");
        commit
            .current_dir(path)
            .args(["commit", "-q", "-m", &format!("Add {name}")]);
        if let Some(date) = date {
            let stamp = date.to_rfc2822();
            commit
                .env("GIT_AUTHOR_DATE", &stamp)
                .env("GIT_COMMITTER_DATE", &stamp);
        }

        let status = commit.status().expect("Failed to commit");
        assert!(status.success(), "commit of {name} failed");
    }

    pub fn clone_repo(source: &Path, destination: &Path) {
        let status = Command::new("git")
            .args(["clone", "-q"])
            .arg(source)
            .arg(destination)
            .status()
            .expect("Failed to clone");
        assert!(status.success(), "clone failed");

        git(destination, &["config", "user.name", "Test User"]);
        git(destination, &["config", "user.email", "test@example.com"]);
    }

    /// Answers git calls from a table and records every call it receives.
    #[derive(Default)]
    pub struct ScriptedGit {
        responses: HashMap<String, std::result::Result<String, String>>,
        accept_deletes: bool,
        calls: RefCell<Vec<String>>,
    }

    impl ScriptedGit {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(mut self, args: &str, output: &str) -> Self {
            self.responses
                .insert(args.to_string(), Ok(output.to_string()));
            self
        }

        pub fn fail(mut self, args: &str, message: &str) -> Self {
            self.responses
                .insert(args.to_string(), Err(message.to_string()));
            self
        }

        /// Lets unscripted `branch -d`/`branch -D` calls succeed.
        pub fn accept_deletes(mut self) -> Self {
            self.accept_deletes = true;
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        pub fn count_calls(&self, prefix: &str) -> usize {
            self.calls
                .borrow()
                .iter()
                .filter(|call| call.starts_with(prefix))
                .count()
        }

        fn answer(&self, key: String, args: &[&str]) -> Result<String> {
            self.calls.borrow_mut().push(key.clone());

            match self.responses.get(&key) {
                Some(Ok(output)) => Ok(output.clone()),
                Some(Err(message)) => Err(TidyError::git_command(args, message.clone())),
                None if self.accept_deletes && is_delete(args) => {
                    Ok(format!("Deleted branch {}", args[2]))
                }
                None => Err(TidyError::git_command(args, "unscripted git call")),
            }
        }
    }

    fn is_delete(args: &[&str]) -> bool {
        args.len() == 3 && args[0] == "branch" && (args[1] == "-d" || args[1] == "-D")
    }

    impl GitExecutor for ScriptedGit {
        fn output(&self, args: &[&str]) -> Result<String> {
            self.answer(args.join(" "), args)
        }

        fn pipe(&self, first: &[&str], second: &[&str]) -> Result<String> {
            let key = format!("{} | {}", first.join(" "), second.join(" "));
            self.answer(key, first)
        }
    }

    /// Gives the same answer to every prompt and counts how often it was asked.
    pub struct ScriptedConfirmer {
        answer: bool,
        asked: Cell<usize>,
    }

    impl ScriptedConfirmer {
        pub fn answering(answer: bool) -> Self {
            Self {
                answer,
                asked: Cell::new(0),
            }
        }

        pub fn times_asked(&self) -> usize {
            self.asked.get()
        }
    }

    impl Confirmer for ScriptedConfirmer {
        fn confirm(&self, _prompt: &str) -> Result<bool> {
            self.asked.set(self.asked.get() + 1);
            Ok(self.answer)
        }
    }
}
