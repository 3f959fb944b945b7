//! Range and format checks for loaded settings

use crate::config::error::ConfigError;
use crate::config::settings::{DatabaseConfig, FileSettings, LoggerSettings, ServerConfig, Settings};

const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

/// diesel-async is built with the postgres backend only
const VALID_DATABASE_SCHEMES: &[&str] = &["postgres://", "postgresql://"];

impl ServerConfig {
    /// Validate server configuration
    ///
    /// # Validation Rules
    /// - Port must be between 1 and 65535
    /// - Request timeout must be greater than 0
    /// - CORS origins must be non-empty strings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::validation(
                "server.port",
                "Port must be between 1 and 65535. Please specify a valid port number.",
            ));
        }

        if self.request_timeout == 0 {
            return Err(ConfigError::validation(
                "server.request_timeout",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        if self.cors_origins.iter().any(|origin| origin.trim().is_empty()) {
            return Err(ConfigError::validation(
                "server.cors_origins",
                "CORS origins cannot contain empty entries.",
            ));
        }

        Ok(())
    }
}

impl DatabaseConfig {
    /// Validate database configuration
    ///
    /// # Validation Rules
    /// - URL must not be empty and must use a PostgreSQL scheme
    /// - Both pool bounds must be greater than 0
    /// - Min connections must not exceed max connections
    /// - Connection timeout must be greater than 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::validation(
                "database.url",
                "Database URL is required. Set database.url or BAKERY_DATABASE__URL.",
            ));
        }

        if !VALID_DATABASE_SCHEMES
            .iter()
            .any(|scheme| self.url.starts_with(scheme))
        {
            return Err(ConfigError::validation(
                "database.url",
                "Invalid database URL format. Expected format: postgres://[user:password@]host[:port]/database",
            ));
        }

        if self.max_connections == 0 {
            return Err(ConfigError::validation(
                "database.max_connections",
                "Max connections must be greater than 0.",
            ));
        }

        if self.min_connections == 0 {
            return Err(ConfigError::validation(
                "database.min_connections",
                "Min connections must be greater than 0.",
            ));
        }

        if self.min_connections > self.max_connections {
            return Err(ConfigError::validation(
                "database.min_connections",
                format!(
                    "Min connections ({}) cannot exceed max connections ({}).",
                    self.min_connections, self.max_connections
                ),
            ));
        }

        if self.connection_timeout == 0 {
            return Err(ConfigError::validation(
                "database.connection_timeout",
                "Connection timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl FileSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && self.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path is required when file logging is enabled.",
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::validation(
                "logger.file.format",
                format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            ));
        }

        Ok(())
    }
}

impl LoggerSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::validation(
                "logger.level",
                format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            ));
        }

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::validation(
                "logger",
                "At least one output (console or file) must be enabled.",
            ));
        }

        self.file.validate()
    }
}

impl Settings {
    /// Validate every section; the first failure wins.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.database.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_database() -> DatabaseConfig {
        DatabaseConfig {
            url: "postgres://localhost/bakery".to_string(),
            ..DatabaseConfig::default()
        }
    }

    fn field_of(result: Result<(), ConfigError>) -> String {
        match result {
            Err(ConfigError::ValidationError { field, .. }) => field,
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_server_port_zero_rejected() {
        let config = ServerConfig {
            port: 0,
            ..ServerConfig::default()
        };
        assert_eq!(field_of(config.validate()), "server.port");
    }

    #[test]
    fn test_server_timeout_zero_rejected() {
        let config = ServerConfig {
            request_timeout: 0,
            ..ServerConfig::default()
        };
        assert_eq!(field_of(config.validate()), "server.request_timeout");
    }

    #[test]
    fn test_blank_cors_origin_rejected() {
        let config = ServerConfig {
            cors_origins: vec!["http://localhost:3000".to_string(), " ".to_string()],
            ..ServerConfig::default()
        };
        assert_eq!(field_of(config.validate()), "server.cors_origins");
    }

    #[test]
    fn test_database_url_required() {
        assert_eq!(field_of(DatabaseConfig::default().validate()), "database.url");
    }

    #[test]
    fn test_database_accepts_postgres_schemes_only() {
        assert!(valid_database().validate().is_ok());

        let postgresql = DatabaseConfig {
            url: "postgresql://user:pw@db:5432/bakery".to_string(),
            ..DatabaseConfig::default()
        };
        assert!(postgresql.validate().is_ok());

        for url in ["sqlite://bakery.db", "mysql://localhost/bakery", "localhost/bakery"] {
            let config = DatabaseConfig {
                url: url.to_string(),
                ..DatabaseConfig::default()
            };
            assert_eq!(field_of(config.validate()), "database.url", "url: {}", url);
        }
    }

    #[test]
    fn test_database_pool_bounds() {
        let config = DatabaseConfig {
            min_connections: 20,
            max_connections: 5,
            ..valid_database()
        };
        assert_eq!(field_of(config.validate()), "database.min_connections");

        let config = DatabaseConfig {
            max_connections: 0,
            ..valid_database()
        };
        assert_eq!(field_of(config.validate()), "database.max_connections");

        let config = DatabaseConfig {
            connection_timeout: 0,
            ..valid_database()
        };
        assert_eq!(field_of(config.validate()), "database.connection_timeout");
    }

    #[test]
    fn test_logger_level_and_format() {
        let settings = LoggerSettings {
            level: "verbose".to_string(),
            ..LoggerSettings::default()
        };
        assert_eq!(field_of(settings.validate()), "logger.level");

        let mut settings = LoggerSettings::default();
        settings.file.format = "xml".to_string();
        assert_eq!(field_of(settings.validate()), "logger.file.format");

        let mut settings = LoggerSettings::default();
        settings.file.enabled = true;
        settings.file.path = "  ".to_string();
        assert_eq!(field_of(settings.validate()), "logger.file.path");
    }

    #[test]
    fn test_settings_validate_checks_every_section() {
        let settings = Settings {
            database: valid_database(),
            ..Settings::default()
        };
        assert!(settings.validate().is_ok());

        assert_eq!(field_of(Settings::default().validate()), "database.url");
    }
}
