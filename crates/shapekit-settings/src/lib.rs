//! Shapekit Settings Crate
//!
//! Handles configuration files: loading, saving and validation.

pub mod config;
pub mod error;

pub use config::{default_config_path, Config, GeometrySettings, LoggingSettings, LOG_LEVELS};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
