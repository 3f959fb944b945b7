//! CLI argument parsing with clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// HTTP API for bakeries and their baked goods
#[derive(Parser, Debug)]
#[command(name = "bakery-api")]
#[command(about = "HTTP API for bakeries and their baked goods")]
#[command(long_about = "
bakery-api serves a JSON API over a PostgreSQL database of bakeries and
the baked goods they sell.

EXAMPLES:
    # Start the server with the layered configuration in ./config
    bakery-api serve

    # Bind to all interfaces on a custom port
    bakery-api serve --host 0.0.0.0 --port 8080

    # Use a single configuration file
    bakery-api --config /etc/bakery-api/production.toml serve

    # Check configuration without starting the server
    bakery-api serve --dry-run

    # Apply, preview or revert database migrations
    bakery-api migrate
    bakery-api migrate --dry-run
    bakery-api migrate --rollback 1
")]
#[command(version = crate::build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute; defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Loads this single TOML file instead of the layered `config/` directory.
    /// `BAKERY_*` environment variables still apply on top.
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection (`BAKERY_APP_ENV`)
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve {
        /// Host address to bind to
        #[arg(long, value_name = "ADDRESS", value_parser = super::validation::validate_host_address)]
        host: Option<String>,

        /// Port number to listen on (default: 5555)
        #[arg(short, long, value_name = "PORT", value_parser = super::validation::validate_port)]
        port: Option<u16>,

        /// Log level override; wins over --verbose and --quiet
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,

        /// Validate configuration and exit
        #[arg(long)]
        dry_run: bool,
    },
    /// Database migration operations
    Migrate {
        /// Show pending migrations without applying them
        #[arg(long, conflicts_with = "rollback")]
        dry_run: bool,

        /// Number of most recent migrations to revert (1-100)
        #[arg(long, value_name = "STEPS", value_parser = super::validation::validate_rollback_steps)]
        rollback: Option<u32>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "test")]
    Test,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    #[value(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl Cli {
    /// True when the process should go on to run the HTTP server.
    pub fn starts_server(&self) -> bool {
        match self.command {
            None => true,
            Some(Commands::Serve { dry_run, .. }) => !dry_run,
            Some(Commands::Migrate { .. }) => false,
        }
    }

    /// Checks argument combinations clap cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use --verbose and --quiet together".to_string());
        }

        if let Some(Commands::Migrate {
            dry_run: true,
            rollback: Some(_),
        }) = self.command
        {
            return Err("Cannot use --dry-run and --rollback together".to_string());
        }

        Ok(())
    }
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Test => crate::config::Environment::Test,
            Environment::Staging => crate::config::Environment::Staging,
            Environment::Production => crate::config::Environment::Production,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_version_flag() {
        let err = Cli::try_parse_from(["bakery-api", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_subcommand_starts_server() {
        let cli = Cli::try_parse_from(["bakery-api"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.starts_server());
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_serve_arguments() {
        let cli = Cli::try_parse_from([
            "bakery-api",
            "serve",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--log-level",
            "warning",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Serve {
                ref host,
                port,
                log_level,
                dry_run,
            }) => {
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
                assert_eq!(port, Some(8080));
                assert_eq!(log_level, Some(LogLevel::Warn));
                assert!(!dry_run);
            }
            _ => panic!("Expected Serve command"),
        }
        assert!(cli.starts_server());
    }

    #[test]
    fn test_dry_run_and_migrate_do_not_start_server() {
        let cli = Cli::try_parse_from(["bakery-api", "serve", "--dry-run"]).unwrap();
        assert!(!cli.starts_server());

        let cli = Cli::try_parse_from(["bakery-api", "migrate", "--rollback", "2"]).unwrap();
        assert!(!cli.starts_server());
        assert!(matches!(
            cli.command,
            Some(Commands::Migrate {
                dry_run: false,
                rollback: Some(2)
            })
        ));
    }

    #[test]
    fn test_conflicting_flags() {
        let err = Cli::try_parse_from(["bakery-api", "--verbose", "--quiet"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);

        let err =
            Cli::try_parse_from(["bakery-api", "migrate", "--dry-run", "--rollback", "1"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_environment_aliases() {
        let cli = Cli::try_parse_from(["bakery-api", "--env", "prod"]).unwrap();
        assert_eq!(cli.env, Some(Environment::Production));
        assert_eq!(
            crate::config::Environment::from(Environment::Staging),
            crate::config::Environment::Staging
        );
    }
}
