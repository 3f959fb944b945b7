//! `serve --dry-run`: validate and summarize configuration.

use crate::config::Settings;
use crate::error::AppResult;

pub struct ServeCommandHandler {
    config: Settings,
}

impl ServeCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Validate configuration without binding a socket or touching the database.
    pub fn validate_only(&self) -> AppResult<()> {
        self.config.validate()?;
        self.config.logger.clone().into_logger_config()?;

        println!("✓ Configuration is valid");
        println!("✓ Server would bind to: {}", self.config.server.address());
        println!(
            "✓ Request timeout: {}s, CORS origins: {}",
            self.config.server.request_timeout,
            if self.config.server.cors_origins.is_empty() {
                "any".to_string()
            } else {
                self.config.server.cors_origins.join(", ")
            }
        );
        println!(
            "✓ Database pool: {}-{} connections, auto-migrate {}",
            self.config.database.min_connections,
            self.config.database.max_connections,
            if self.config.database.auto_migrate { "on" } else { "off" }
        );
        println!("✓ Log level: {}", self.config.logger.level);
        println!("Dry run completed successfully");

        Ok(())
    }

    pub fn config(&self) -> &Settings {
        &self.config
    }
}
