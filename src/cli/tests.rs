#[cfg(test)]
mod cli_tests {
    use crate::cli::parser::*;
    use clap::error::ErrorKind;
    use clap::{CommandFactory, Parser};

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["branch-tidy"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.global.dry_run);
        assert!(!cli.global.force);
        assert_eq!(cli.global.days, None);
        assert_eq!(cli.global.top(), None);
    }

    #[test]
    fn test_each_subcommand_parses() {
        for (name, expected) in [
            ("merged", "Merged"),
            ("stale", "Stale"),
            ("gone", "Gone"),
            ("large", "Large"),
            ("all", "All"),
            ("prune", "Prune"),
        ] {
            let cli = Cli::try_parse_from(["branch-tidy", name]).unwrap();
            assert_eq!(format!("{:?}", cli.command.unwrap()), expected);
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["branch-tidy", "stale", "--days", "60", "--dry-run"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Stale)));
        assert_eq!(cli.global.days, Some(60));
        assert!(cli.global.dry_run);
    }

    #[test]
    fn test_global_flags_before_subcommand() {
        let cli =
            Cli::try_parse_from(["branch-tidy", "--force", "--top", "5", "-vv", "large"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Large)));
        assert!(cli.global.force);
        assert_eq!(cli.global.top(), Some(5));
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn test_zero_thresholds_rejected() {
        assert!(Cli::try_parse_from(["branch-tidy", "stale", "--days", "0"]).is_err());
        assert!(Cli::try_parse_from(["branch-tidy", "large", "--top", "0"]).is_err());
        assert!(Cli::try_parse_from(["branch-tidy", "stale", "--days", "soon"]).is_err());
    }

    #[test]
    fn test_oversized_days_accepted() {
        let max = u32::MAX.to_string();
        let cli = Cli::try_parse_from(["branch-tidy", "stale", "--days", max.as_str()]).unwrap();
        assert_eq!(cli.global.days, Some(u32::MAX));

        assert!(Cli::try_parse_from(["branch-tidy", "stale", "--days", "4294967296"]).is_err());
    }

    #[test]
    fn test_help_subcommand_displays_help() {
        let err = match Cli::try_parse_from(["branch-tidy", "help"]) {
            Ok(_) => panic!("help should short-circuit parsing"),
            Err(e) => e,
        };
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        assert!(Cli::try_parse_from(["branch-tidy", "squash"]).is_err());
    }

    #[test]
    fn test_config_subcommands() {
        let cli = Cli::try_parse_from(["branch-tidy", "config", "init", "--overwrite"]).unwrap();
        match cli.command.unwrap() {
            Commands::Config(args) => {
                assert!(matches!(
                    args.command,
                    Some(ConfigCommands::Init { overwrite: true })
                ));
            }
            _ => panic!("Expected Config command"),
        }

        let cli = Cli::try_parse_from(["branch-tidy", "config"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config(ConfigArgs { command: None }))
        ));
    }

    #[test]
    fn test_completion_shell_parsing() {
        let cli = Cli::try_parse_from(["branch-tidy", "completion", "zsh"]).unwrap();
        match cli.command.unwrap() {
            Commands::Completion(args) => assert_eq!(args.shell, Shell::Zsh),
            _ => panic!("Expected Completion command"),
        }
        assert!(Cli::try_parse_from(["branch-tidy", "completion", "tcsh"]).is_err());
    }
}
