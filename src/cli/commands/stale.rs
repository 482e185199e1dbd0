use super::common::{candidates, print_header, review_and_delete, BranchKind, CommandContext};
use crate::core::git::DeletionReport;
use crate::utils::{pluralize, Result};

pub fn execute(ctx: &CommandContext<'_>) -> Result<Option<DeletionReport>> {
    print_header(&format!(
        "Branches without commits in the last {}",
        pluralize(ctx.options.days as usize, "day", "days")
    ));

    let probe = ctx
        .branch_manager()
        .stale_branches(ctx.options.days, ctx.now, &ctx.exclusions());
    let branches = candidates(BranchKind::Stale, probe);

    review_and_delete(ctx, BranchKind::Stale, &branches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, RunOptions};
    use crate::test_utils::test_helpers::*;
    use chrono::{Duration, Utc};

    #[test]
    fn test_sixty_day_threshold_end_to_end() {
        let (temp_dir, repo) = setup_test_repo();
        let path = temp_dir.path();
        let now = Utc::now();

        for (name, days) in [("almost", 59), ("past", 61)] {
            git(path, &["checkout", "-q", "-b", name, "main"]);
            commit_file(path, &format!("{name}.txt"), name, Some(now - Duration::days(days)));
        }
        git(path, &["checkout", "-q", "main"]);

        let confirmer = ScriptedConfirmer::answering(true);
        let options = RunOptions::resolve(&Config::default(), false, false, Some(60), None);
        let ctx = CommandContext::resolve(&repo, &confirmer, options);

        let report = execute(&ctx).unwrap().unwrap();
        assert_eq!(confirmer.times_asked(), 1);
        assert_eq!(report.deleted, vec!["past"]);
        assert_eq!(
            ctx.branch_manager().local_branches().unwrap_or_empty(),
            vec!["almost", "main"]
        );
    }

    #[test]
    fn test_default_and_current_never_stale() {
        let old = (Utc::now() - Duration::days(365)).timestamp().to_string();
        let git = ScriptedGit::new()
            .respond("rev-parse --abbrev-ref HEAD", "dev")
            .respond("show-ref --verify --quiet refs/heads/main", "")
            .respond("branch", "* dev\n  main")
            .respond("log -1 --format=%ct dev", &old)
            .respond("log -1 --format=%ct main", &old)
            .accept_deletes();
        let confirmer = ScriptedConfirmer::answering(true);
        let options = RunOptions::resolve(&Config::default(), false, true, None, None);
        let ctx = CommandContext::resolve(&git, &confirmer, options);

        assert!(execute(&ctx).unwrap().is_none());
        assert_eq!(git.count_calls("branch -D"), 0);
    }
}
