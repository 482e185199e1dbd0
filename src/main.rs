use branch_tidy::cli::{execute_command, Cli};
use branch_tidy::logging;
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.global.verbose) {
        eprintln!("branch-tidy: {e:#}");
    }

    if let Err(e) = execute_command(cli) {
        eprintln!("branch-tidy: {e}");
        std::process::exit(e.exit_code());
    }
}
