use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "branch-tidy")]
#[command(about = "Clean up merged, stale and gone git branches")]
#[command(
    version,
    long_about = "Finds local branches that are merged into the default branch, have not \
                  seen a commit in a while, or whose upstream was deleted, and offers to \
                  delete them. Also lists the largest blobs in the repository history.",
    after_help = "EXAMPLES:
    # Preview every check without touching anything
    branch-tidy all --dry-run

    # Delete merged branches without prompting
    branch-tidy merged --force

    # Branches without commits for two months
    branch-tidy stale --days 60

    # Fetch with prune, then clean up branches whose upstream is gone
    branch-tidy prune

    # The 20 largest blobs ever committed
    branch-tidy large --top 20"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Delete branches already merged into the default branch
    Merged,
    /// Delete branches without commits in the last --days days
    Stale,
    /// Delete branches whose upstream branch no longer exists
    Gone,
    /// List the largest blobs in history
    Large,
    /// Run merged, stale, gone and large in sequence
    All,
    /// Fetch every remote with --prune, then clean up gone branches
    Prune,
    /// Show or initialize the configuration file
    Config(ConfigArgs),
    /// Generate shell completion script
    Completion(CompletionArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Age threshold for stale branches
    #[arg(
        long,
        global = true,
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Days without commits before a branch is stale [default: 30]"
    )]
    pub days: Option<u32>,

    /// Only show what would be deleted
    #[arg(long, global = true, help = "Only show what would be deleted (dry run)")]
    pub dry_run: bool,

    /// Skip confirmation prompts
    #[arg(long, short, global = true, help = "Skip confirmation prompts")]
    pub force: bool,

    /// Number of blobs to list
    #[arg(
        long,
        global = true,
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Number of large blobs to list [default: 10]"
    )]
    pub top: Option<u32>,

    /// Increase log verbosity
    #[arg(long, short, global = true, action = ArgAction::Count, help = "Increase log verbosity (-v, -vv)")]
    pub verbose: u8,
}

impl GlobalArgs {
    pub fn top(&self) -> Option<usize> {
        self.top.map(|n| n as usize)
    }
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long, help = "Overwrite an existing configuration file")]
        overwrite: bool,
    },
}

#[derive(Args, Debug)]
pub struct CompletionArgs {
    /// Shell to generate completion for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}
