use super::command::{GitExecutor, OnFailure, SystemGit};
use crate::core::probe::Probe;
use crate::utils::{Result, TidyError};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const FALLBACK_DEFAULT_BRANCH: &str = "main";

/// A resolution step for the repository's integration branch.
type DefaultBranchStrategy = fn(&dyn GitExecutor, &str) -> Option<String>;

/// Tried in order; the first strategy that answers wins.
const DEFAULT_BRANCH_STRATEGIES: &[(&str, DefaultBranchStrategy)] = &[
    ("remote-head", from_remote_head),
    ("local-main", prefer_main),
    ("local-master", prefer_master),
];

#[derive(Debug, Clone)]
pub struct GitRepository {
    pub root: PathBuf,
    git: SystemGit,
}

impl GitRepository {
    pub fn discover() -> Result<Self> {
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    pub fn discover_from(path: &Path) -> Result<Self> {
        let probe = SystemGit::new(path);
        let root = probe
            .output(&["rev-parse", "--show-toplevel"])
            .map_err(|e| match e {
                TidyError::GitCommand { message, .. } => TidyError::not_a_repository(message),
                other => other,
            })?;

        if root.is_empty() {
            return Err(TidyError::not_a_repository(format!(
                "{} is not inside a working tree",
                path.display()
            )));
        }

        let root = PathBuf::from(root);
        debug!(root = %root.display(), "discovered repository");

        Ok(Self {
            git: SystemGit::new(&root),
            root,
        })
    }
}

impl GitExecutor for GitRepository {
    fn output(&self, args: &[&str]) -> Result<String> {
        self.git.output(args)
    }

    fn pipe(&self, first: &[&str], second: &[&str]) -> Result<String> {
        self.git.pipe(first, second)
    }
}

/// The checked-out branch, or `None` on a detached HEAD or unborn repository.
pub fn current_branch(git: &dyn GitExecutor) -> Option<String> {
    let name = git
        .run(&["rev-parse", "--abbrev-ref", "HEAD"], OnFailure::Empty)
        .ok()?;
    (!name.is_empty() && name != "HEAD").then_some(name)
}

pub fn default_branch(git: &dyn GitExecutor, remote: &str) -> String {
    for (name, strategy) in DEFAULT_BRANCH_STRATEGIES {
        if let Some(branch) = strategy(git, remote) {
            debug!(strategy = name, branch = %branch, "resolved default branch");
            return branch;
        }
    }

    debug!(
        branch = FALLBACK_DEFAULT_BRANCH,
        "falling back to default branch constant"
    );
    FALLBACK_DEFAULT_BRANCH.to_string()
}

pub fn remotes(git: &dyn GitExecutor) -> Probe<Vec<String>> {
    git.probe(&["remote"]).map(|output| {
        output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    })
}

fn from_remote_head(git: &dyn GitExecutor, remote: &str) -> Option<String> {
    let reference = format!("refs/remotes/{remote}/HEAD");
    let target = git
        .output(&["symbolic-ref", "--quiet", &reference])
        .ok()?;
    let prefix = format!("refs/remotes/{remote}/");
    target
        .strip_prefix(&prefix)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

fn prefer_main(git: &dyn GitExecutor, _remote: &str) -> Option<String> {
    local_branch_exists(git, "main").then(|| "main".to_string())
}

fn prefer_master(git: &dyn GitExecutor, _remote: &str) -> Option<String> {
    local_branch_exists(git, "master").then(|| "master".to_string())
}

fn local_branch_exists(git: &dyn GitExecutor, name: &str) -> bool {
    let reference = format!("refs/heads/{name}");
    git.succeeds(&["show-ref", "--verify", "--quiet", &reference])
}
