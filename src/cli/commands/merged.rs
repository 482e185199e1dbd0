use super::common::{candidates, print_header, review_and_delete, BranchKind, CommandContext};
use crate::core::git::DeletionReport;
use crate::utils::Result;

pub fn execute(ctx: &CommandContext<'_>) -> Result<Option<DeletionReport>> {
    print_header(&format!("Branches merged into {}", ctx.default_branch));

    let probe = ctx
        .branch_manager()
        .merged_branches(&ctx.default_branch, &ctx.exclusions());
    let branches = candidates(BranchKind::Merged, probe);

    review_and_delete(ctx, BranchKind::Merged, &branches)
}
