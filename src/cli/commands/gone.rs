use super::common::{candidates, print_header, review_and_delete, BranchKind, CommandContext};
use crate::core::git::DeletionReport;
use crate::utils::Result;

pub fn execute(ctx: &CommandContext<'_>) -> Result<Option<DeletionReport>> {
    print_header("Branches whose upstream is gone");

    let probe = ctx.branch_manager().gone_branches(&ctx.exclusions());
    let branches = candidates(BranchKind::Gone, probe);

    review_and_delete(ctx, BranchKind::Gone, &branches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, RunOptions};
    use crate::test_utils::test_helpers::*;

    #[test]
    fn test_gone_branches_force_deleted() {
        let git = ScriptedGit::new()
            .respond("rev-parse --abbrev-ref HEAD", "main")
            .respond("show-ref --verify --quiet refs/heads/main", "")
            .respond(
                "branch -vv",
                "* main  1a2b3c4 [origin/main] Initial\n  old   5d6e7f8 [origin/old: gone] Old",
            )
            .accept_deletes();
        let confirmer = ScriptedConfirmer::answering(true);
        let options = RunOptions::resolve(&Config::default(), false, false, None, None);
        let ctx = CommandContext::resolve(&git, &confirmer, options);

        let report = execute(&ctx).unwrap().unwrap();
        assert_eq!(git.count_calls("branch -D old"), 1);
        assert_eq!(report.summary(), "Deleted 1/1 branches.");
    }
}
