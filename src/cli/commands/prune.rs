use super::common::{print_header, CommandContext};
use super::gone;
use crate::core::git::{remotes, DeletionReport};
use crate::ui::{paint, Style};
use crate::utils::Result;
use tracing::warn;

#[derive(Debug, Default)]
pub struct PruneSummary {
    pub fetched: Vec<String>,
    pub failed: Vec<(String, String)>,
    pub report: Option<DeletionReport>,
}

/// `git fetch --prune` every remote, then clean up branches whose upstream vanished.
pub fn execute(ctx: &CommandContext<'_>) -> Result<PruneSummary> {
    print_header("Pruning remote-tracking branches");

    let probe = remotes(ctx.git);
    if let Some(reason) = probe.failure() {
        warn!(%reason, "could not list remotes");
    }
    let remote_names = probe.unwrap_or_empty();

    let mut summary = PruneSummary::default();

    if remote_names.is_empty() {
        println!("No remotes configured.");
    }

    for remote in &remote_names {
        if ctx.options.dry_run {
            println!(
                "{}",
                paint(
                    Style::Dim,
                    &format!("Dry run: would run git fetch --prune {remote}")
                )
            );
            continue;
        }

        match ctx.git.output(&["fetch", "--prune", remote.as_str()]) {
            Ok(_) => {
                println!("  {} {}", paint(Style::Green, "✓"), remote);
                summary.fetched.push(remote.clone());
            }
            Err(e) => {
                println!("  {} {}: {}", paint(Style::Red, "✗"), remote, e);
                summary.failed.push((remote.clone(), e.to_string()));
            }
        }
    }

    println!();
    summary.report = gone::execute(ctx)?;

    Ok(summary)
}
