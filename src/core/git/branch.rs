use super::command::GitExecutor;
use crate::core::probe::Probe;
use crate::core::stale;
use crate::utils::Result;
use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, info};

/// Upstream bracket of a `git branch -vv` line whose remote branch disappeared.
/// Matches git's untranslated output; `SystemGit` pins the C locale.
static GONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\S+)\s+[0-9a-f]+\s+(?:\([^)]*\)\s+)?\[([^\]:]+): gone\]")
        .expect("gone pattern is a valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchInfo {
    pub name: String,
    pub age_days: Option<i64>,
    pub upstream: Option<String>,
}

impl BranchInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age_days: None,
            upstream: None,
        }
    }

    pub fn with_age(mut self, days: i64) -> Self {
        self.age_days = Some(days);
        self
    }

    pub fn with_upstream(mut self, upstream: impl Into<String>) -> Self {
        self.upstream = Some(upstream.into());
        self
    }
}

/// Branch names that must never be offered for deletion.
#[derive(Debug, Clone, Default)]
pub struct Exclusions {
    names: Vec<String>,
}

impl Exclusions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: Option<&str>) -> Self {
        if let Some(name) = name {
            if !self.contains(name) {
                self.names.push(name.to_string());
            }
        }
        self
    }

    pub fn with_all<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self = self.with(Some(name.as_ref()));
        }
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}

#[derive(Debug, Default)]
pub struct DeletionReport {
    pub attempted: usize,
    pub deleted: Vec<String>,
    pub failures: Vec<(String, String)>,
}

impl DeletionReport {
    pub fn deleted_count(&self) -> usize {
        self.deleted.len()
    }

    pub fn summary(&self) -> String {
        format!(
            "Deleted {}/{} branches.",
            self.deleted_count(),
            self.attempted
        )
    }
}

pub struct BranchManager<'a> {
    git: &'a dyn GitExecutor,
}

impl<'a> BranchManager<'a> {
    pub fn new(git: &'a dyn GitExecutor) -> Self {
        Self { git }
    }

    pub fn local_branches(&self) -> Probe<Vec<String>> {
        self.git
            .probe(&["branch"])
            .map(|output| parse_branch_list(&output))
    }

    pub fn merged_branches(
        &self,
        default_branch: &str,
        exclude: &Exclusions,
    ) -> Probe<Vec<BranchInfo>> {
        self.git
            .probe(&["branch", "--merged", default_branch])
            .map(|output| {
                parse_branch_list(&output)
                    .into_iter()
                    .filter(|name| !exclude.contains(name))
                    .map(BranchInfo::new)
                    .collect()
            })
    }

    pub fn last_commit_time(&self, branch: &str) -> Option<DateTime<Utc>> {
        let output = match self.git.output(&["log", "-1", "--format=%ct", branch]) {
            Ok(output) => output,
            Err(e) => {
                debug!(branch, error = %e, "no commit timestamp");
                return None;
            }
        };

        let seconds = output.trim().parse::<i64>().ok()?;
        DateTime::from_timestamp(seconds, 0)
    }

    pub fn stale_branches(
        &self,
        days: u32,
        now: DateTime<Utc>,
        exclude: &Exclusions,
    ) -> Probe<Vec<BranchInfo>> {
        let cutoff = stale::cutoff(now, days);

        self.local_branches().map(|names| {
            names
                .into_iter()
                .filter(|name| !exclude.contains(name))
                .filter_map(|name| {
                    let last_commit = self.last_commit_time(&name)?;
                    stale::is_stale(last_commit, cutoff)
                        .then(|| BranchInfo::new(name).with_age(stale::age_days(last_commit, now)))
                })
                .collect()
        })
    }

    pub fn gone_branches(&self, exclude: &Exclusions) -> Probe<Vec<BranchInfo>> {
        self.git
            .probe(&["branch", "-vv"])
            .map(|output| {
                parse_gone_branches(&output)
                    .into_iter()
                    .filter(|branch| !exclude.contains(&branch.name))
                    .collect()
            })
    }

    pub fn delete_branch(&self, name: &str, force: bool) -> Result<()> {
        let flag = if force { "-D" } else { "-d" };
        self.git.output(&["branch", flag, name]).map(|_| ())
    }

    pub fn delete_branches(&self, branches: &[BranchInfo], force: bool) -> DeletionReport {
        let mut report = DeletionReport::default();

        for branch in branches {
            report.attempted += 1;
            match self.delete_branch(&branch.name, force) {
                Ok(()) => {
                    info!(branch = %branch.name, "deleted branch");
                    report.deleted.push(branch.name.clone());
                }
                Err(e) => {
                    debug!(branch = %branch.name, error = %e, "delete failed");
                    report.failures.push((branch.name.clone(), e.to_string()));
                }
            }
        }

        report
    }
}

/// Parses plain `git branch` output into branch names.
///
/// Strips the `*` (current) and `+` (checked out in another worktree)
/// markers and skips detached-HEAD entries.
pub fn parse_branch_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(strip_marker)
        .filter(|line| !line.is_empty() && !line.starts_with('('))
        .map(str::to_string)
        .collect()
}

pub fn parse_gone_branches(output: &str) -> Vec<BranchInfo> {
    output
        .lines()
        .map(strip_marker)
        .filter_map(|line| {
            let captures = GONE_PATTERN.captures(line)?;
            Some(BranchInfo::new(&captures[1]).with_upstream(&captures[2]))
        })
        .collect()
}

fn strip_marker(line: &str) -> &str {
    line.trim_start_matches(['*', '+']).trim()
}
