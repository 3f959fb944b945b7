//! Configuration management
//!
//! Layered loading from TOML files under `config/` plus `BAKERY_*`
//! environment variable overrides. See [`ConfigLoader`] for the order.

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use environment::Environment;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{DatabaseConfig, LoggerSettings, ServerConfig, Settings};
