pub mod commands;
pub mod parser;

#[cfg(test)]
mod tests;

pub use parser::{Cli, Commands};

use crate::config::{Config, RunOptions};
use crate::core::git::GitRepository;
use crate::ui::TerminalConfirmer;
use crate::utils::Result;
use clap::CommandFactory;
use commands::common::CommandContext;
use parser::GlobalArgs;

pub fn execute_command(cli: Cli) -> Result<()> {
    let command = match cli.command {
        Some(command) => command,
        None => {
            Cli::command().print_help()?;
            println!();
            return Ok(());
        }
    };

    match command {
        Commands::Config(args) => commands::config::execute(args),
        Commands::Completion(args) => commands::completion::execute(args),
        Commands::Merged => in_repository(&cli.global, |ctx| {
            commands::merged::execute(ctx).map(|_| ())
        }),
        Commands::Stale => in_repository(&cli.global, |ctx| {
            commands::stale::execute(ctx).map(|_| ())
        }),
        Commands::Gone => in_repository(&cli.global, |ctx| {
            commands::gone::execute(ctx).map(|_| ())
        }),
        Commands::Large => in_repository(&cli.global, |ctx| {
            commands::large::execute(ctx).map(|_| ())
        }),
        Commands::All => in_repository(&cli.global, commands::all::execute),
        Commands::Prune => in_repository(&cli.global, |ctx| {
            commands::prune::execute(ctx).map(|_| ())
        }),
    }
}

/// Loads the configuration, discovers the repository and runs `run` against it.
fn in_repository<F>(global: &GlobalArgs, run: F) -> Result<()>
where
    F: FnOnce(&CommandContext<'_>) -> Result<()>,
{
    let config = Config::load()?;
    let options = RunOptions::resolve(
        &config,
        global.dry_run,
        global.force,
        global.days,
        global.top(),
    );

    let repo = GitRepository::discover()?;
    let confirmer = TerminalConfirmer;
    let ctx = CommandContext::resolve(&repo, &confirmer, options);

    run(&ctx)
}
