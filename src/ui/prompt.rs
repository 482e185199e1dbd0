use crate::utils::{Result, TidyError};
use dialoguer::Input;
use std::io::{BufRead, Write};

/// Accepts any answer starting with `y`, in either case.
pub fn parse_confirmation(input: &str) -> bool {
    input
        .trim_start()
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'y'))
}

pub trait Confirmer {
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Reads one answer line from the terminal, or from piped stdin.
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        let prompt = format!("{prompt} [y/N]");

        let answer = if atty::is(atty::Stream::Stdin) {
            Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
                .map_err(|e| TidyError::prompt(e.to_string()))?
        } else {
            print!("{prompt}: ");
            std::io::stdout().flush()?;
            let mut line = String::new();
            std::io::stdin().lock().read_line(&mut line)?;
            line
        };

        Ok(parse_confirmation(&answer))
    }
}
