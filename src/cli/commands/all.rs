use super::common::CommandContext;
use super::{gone, large, merged, stale};
use crate::ui::{paint, Style};
use crate::utils::Result;
use tracing::warn;

type Section = fn(&CommandContext<'_>) -> Result<()>;

const SECTIONS: &[(&str, Section)] = &[
    ("merged", run_merged),
    ("stale", run_stale),
    ("gone", run_gone),
    ("large", run_large),
];

/// Runs every check in order; a failing section never stops the next one.
pub fn execute(ctx: &CommandContext<'_>) -> Result<()> {
    for (index, (name, section)) in SECTIONS.iter().enumerate() {
        if index > 0 {
            println!();
        }

        if let Err(e) = section(ctx) {
            warn!(section = name, error = %e, "section failed");
            println!("{}", paint(Style::Red, &format!("{name} check failed: {e}")));
        }
    }

    Ok(())
}

fn run_merged(ctx: &CommandContext<'_>) -> Result<()> {
    merged::execute(ctx).map(|_| ())
}

fn run_stale(ctx: &CommandContext<'_>) -> Result<()> {
    stale::execute(ctx).map(|_| ())
}

fn run_gone(ctx: &CommandContext<'_>) -> Result<()> {
    gone::execute(ctx).map(|_| ())
}

fn run_large(ctx: &CommandContext<'_>) -> Result<()> {
    large::execute(ctx).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, RunOptions};
    use crate::test_utils::test_helpers::*;

    #[test]
    fn test_all_runs_every_section_in_order() {
        let git = ScriptedGit::new()
            .respond("rev-parse --abbrev-ref HEAD", "main")
            .respond("show-ref --verify --quiet refs/heads/main", "");
        let confirmer = ScriptedConfirmer::answering(true);
        let options = RunOptions::resolve(&Config::default(), true, false, None, None);
        let ctx = CommandContext::resolve(&git, &confirmer, options);

        execute(&ctx).unwrap();

        let calls = git.calls();
        let position = |needle: &str| {
            calls
                .iter()
                .position(|call| call.starts_with(needle))
                .unwrap_or_else(|| panic!("missing call {needle}"))
        };

        let merged = position("branch --merged main");
        let stale = calls
            .iter()
            .position(|call| call == "branch")
            .expect("stale listing");
        let gone = position("branch -vv");
        let large = position("rev-list --objects --all | cat-file");

        assert!(merged < stale && stale < gone && gone < large);
    }

    #[test]
    fn test_all_continues_after_prompt_failure() {
        struct BrokenConfirmer;
        impl crate::ui::Confirmer for BrokenConfirmer {
            fn confirm(&self, _prompt: &str) -> Result<bool> {
                Err(crate::utils::TidyError::prompt("no terminal"))
            }
        }

        let git = ScriptedGit::new()
            .respond("rev-parse --abbrev-ref HEAD", "main")
            .respond("show-ref --verify --quiet refs/heads/main", "")
            .respond("branch --merged main", "* main\n  done")
            .accept_deletes();
        let confirmer = BrokenConfirmer;
        let options = RunOptions::resolve(&Config::default(), false, false, None, None);
        let ctx = CommandContext::resolve(&git, &confirmer, options);

        assert!(execute(&ctx).is_ok());
        assert_eq!(git.count_calls("branch -d"), 0);
        assert_eq!(git.count_calls("branch -vv"), 1);
    }
}
