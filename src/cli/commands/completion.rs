use crate::cli::parser::{Cli, CompletionArgs, Shell};
use crate::utils::{Result, TidyError};
use clap::CommandFactory;
use clap_complete::{generate, shells};

const BIN_NAME: &str = "branch-tidy";

pub fn execute(args: CompletionArgs) -> Result<()> {
    let script = generate_completion(args.shell)?;
    println!("{script}");
    Ok(())
}

pub fn generate_completion(shell: Shell) -> Result<String> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();

    match shell {
        Shell::Bash => generate(shells::Bash, &mut cmd, BIN_NAME, &mut buf),
        Shell::Zsh => generate(shells::Zsh, &mut cmd, BIN_NAME, &mut buf),
        Shell::Fish => generate(shells::Fish, &mut cmd, BIN_NAME, &mut buf),
    }

    String::from_utf8(buf)
        .map_err(|e| TidyError::invalid_args(format!("UTF-8 error generating completion: {e}")))
}
