use crate::config::RunOptions;
use crate::core::git::{
    current_branch, default_branch, BranchInfo, BranchManager, DeletionReport, Exclusions,
    GitExecutor,
};
use crate::core::Probe;
use crate::ui::{paint, Confirmer, Style};
use crate::utils::{pluralize, Result};
use chrono::{DateTime, Utc};
use tracing::{info, warn};

/// Everything a branch command needs, resolved once per invocation.
pub struct CommandContext<'a> {
    pub git: &'a dyn GitExecutor,
    pub confirmer: &'a dyn Confirmer,
    pub options: RunOptions,
    pub current_branch: Option<String>,
    pub default_branch: String,
    pub now: DateTime<Utc>,
}

impl<'a> CommandContext<'a> {
    pub fn resolve(
        git: &'a dyn GitExecutor,
        confirmer: &'a dyn Confirmer,
        options: RunOptions,
    ) -> Self {
        let current_branch = current_branch(git);
        let default_branch = default_branch(git, &options.remote);

        Self {
            git,
            confirmer,
            options,
            current_branch,
            default_branch,
            now: Utc::now(),
        }
    }

    pub fn branch_manager(&self) -> BranchManager<'a> {
        BranchManager::new(self.git)
    }

    /// Current, default and configured protected branches.
    pub fn exclusions(&self) -> Exclusions {
        Exclusions::new()
            .with(self.current_branch.as_deref())
            .with(Some(&self.default_branch))
            .with_all(&self.options.protected_branches)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind {
    Merged,
    Stale,
    Gone,
}

impl BranchKind {
    pub fn label(self) -> &'static str {
        match self {
            BranchKind::Merged => "merged",
            BranchKind::Stale => "stale",
            BranchKind::Gone => "gone",
        }
    }

    /// Merged branches can use the safe delete; the others may hold unmerged work.
    pub fn force_delete(self) -> bool {
        !matches!(self, BranchKind::Merged)
    }

    pub fn describe(self, branch: &BranchInfo) -> String {
        match (self, branch.age_days, branch.upstream.as_deref()) {
            (BranchKind::Stale, Some(days), _) => {
                format!("{} ({})", branch.name, pluralize(days as usize, "day", "days"))
            }
            (BranchKind::Gone, _, Some(upstream)) => {
                format!("{} (upstream {} is gone)", branch.name, upstream)
            }
            _ => branch.name.clone(),
        }
    }
}

pub fn print_header(title: &str) {
    println!("{}", paint(Style::Bold, title));
}

/// Turns a probe into a candidate list, noting a failed query instead of hiding it.
pub fn candidates(kind: BranchKind, probe: Probe<Vec<BranchInfo>>) -> Vec<BranchInfo> {
    if let Some(reason) = probe.failure() {
        warn!(kind = kind.label(), %reason, "branch query failed");
        println!(
            "{}",
            paint(
                Style::Yellow,
                &format!("Could not list {} branches; treating as none.", kind.label())
            )
        );
    }
    probe.unwrap_or_empty()
}

/// Lists the candidates, then deletes them unless this is a dry run or the user declines.
pub fn review_and_delete(
    ctx: &CommandContext<'_>,
    kind: BranchKind,
    branches: &[BranchInfo],
) -> Result<Option<DeletionReport>> {
    if branches.is_empty() {
        println!("No {} branches found.", kind.label());
        return Ok(None);
    }

    println!(
        "Found {}:",
        pluralize(
            branches.len(),
            &format!("{} branch", kind.label()),
            &format!("{} branches", kind.label())
        )
    );
    for branch in branches {
        println!("  {}", paint(Style::Cyan, &kind.describe(branch)));
    }

    if ctx.options.dry_run {
        info!(kind = kind.label(), count = branches.len(), "dry run, nothing deleted");
        println!(
            "{}",
            paint(
                Style::Dim,
                &format!(
                    "Dry run: would delete {}.",
                    pluralize(branches.len(), "branch", "branches")
                )
            )
        );
        return Ok(None);
    }

    if !ctx.options.force {
        let prompt = format!(
            "Delete {}?",
            pluralize(
                branches.len(),
                &format!("{} branch", kind.label()),
                &format!("{} branches", kind.label())
            )
        );
        if !ctx.confirmer.confirm(&prompt)? {
            println!("Skipped.");
            return Ok(None);
        }
    }

    let report = ctx
        .branch_manager()
        .delete_branches(branches, kind.force_delete());
    print_report(&report);

    Ok(Some(report))
}

pub fn print_report(report: &DeletionReport) {
    for name in &report.deleted {
        println!("  {} {}", paint(Style::Green, "✓"), name);
    }
    for (name, reason) in &report.failures {
        println!("  {} {}: {}", paint(Style::Red, "✗"), name, reason);
    }
    println!("{}", report.summary());
}
