//! Dispatches parsed commands to their handlers.

use super::handlers::{MigrateCommandHandler, ServeCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::Settings;
use crate::error::{AppError, AppResult};

/// Run every command that finishes on its own.
///
/// `serve` without `--dry-run` returns immediately; the caller then starts
/// the server (see [`Cli::starts_server`]).
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    cli.validate().map_err(|reason| AppError::Validation {
        field: "cli_arguments".to_string(),
        reason,
    })?;

    match cli.command {
        Some(Commands::Serve { dry_run: true, .. }) => {
            ServeCommandHandler::new(settings).validate_only()
        }
        Some(Commands::Serve { .. }) | None => Ok(()),
        Some(Commands::Migrate { dry_run, rollback }) => {
            MigrateCommandHandler::new(settings)
                .execute(dry_run, rollback)
                .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn valid_settings() -> Settings {
        let mut config = Settings::default();
        config.database.url = "postgres://localhost/bakery".to_string();
        config
    }

    #[tokio::test]
    async fn test_serve_dry_run_succeeds_with_valid_settings() {
        let cli = Cli::try_parse_from(["bakery-api", "serve", "--dry-run"]).unwrap();
        assert!(execute_command(&cli, valid_settings()).await.is_ok());
    }

    #[tokio::test]
    async fn test_serve_dry_run_reports_invalid_settings() {
        let cli = Cli::try_parse_from(["bakery-api", "serve", "--dry-run"]).unwrap();
        let result = execute_command(&cli, Settings::default()).await;
        assert!(matches!(result, Err(AppError::Configuration { .. })));
    }

    #[tokio::test]
    async fn test_plain_serve_is_left_to_caller() {
        let cli = Cli::try_parse_from(["bakery-api"]).unwrap();
        assert!(execute_command(&cli, valid_settings()).await.is_ok());
    }

    #[tokio::test]
    async fn test_conflicting_migrate_flags_rejected() {
        let cli = Cli {
            command: Some(Commands::Migrate {
                dry_run: true,
                rollback: Some(5),
            }),
            config: None,
            env: None,
            verbose: false,
            quiet: false,
        };

        match execute_command(&cli, valid_settings()).await {
            Err(AppError::Validation { field, .. }) => assert_eq!(field, "cli_arguments"),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }
}
