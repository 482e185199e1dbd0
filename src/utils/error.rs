use thiserror::Error;

#[derive(Error, Debug)]
pub enum TidyError {
    #[error("Not a git repository: {message}")]
    NotARepository { message: String },

    #[error("Git command failed ({command}): {message}")]
    GitCommand { command: String, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid arguments: {message}")]
    InvalidArgs { message: String },

    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TidyError>;

impl TidyError {
    pub fn not_a_repository(message: impl Into<String>) -> Self {
        Self::NotARepository {
            message: message.into(),
        }
    }

    pub fn git_command(args: &[&str], message: impl Into<String>) -> Self {
        Self::GitCommand {
            command: format!("git {}", args.join(" ")),
            message: message.into(),
        }
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::InvalidArgs {
            message: message.into(),
        }
    }

    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation_helpers() {
        let git_err = TidyError::git_command(&["branch", "-d", "topic"], "not fully merged");
        assert!(matches!(git_err, TidyError::GitCommand { .. }));
        assert_eq!(
            git_err.to_string(),
            "Git command failed (git branch -d topic): not fully merged"
        );

        let repo_err = TidyError::not_a_repository("/tmp/elsewhere");
        assert!(matches!(repo_err, TidyError::NotARepository { .. }));
        assert_eq!(repo_err.to_string(), "Not a git repository: /tmp/elsewhere");
        assert_eq!(repo_err.exit_code(), 1);

        let config_err = TidyError::config_error("days must be positive");
        assert_eq!(
            config_err.to_string(),
            "Configuration error: days must be positive"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "git not found");
        let tidy_err: TidyError = io_err.into();
        assert!(matches!(tidy_err, TidyError::Io(_)));
    }
}
