//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! optional TOML files and environment variables. Each sub-module
//! represents a logical configuration section.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;
use crate::result::AppResult;

/// Environment variables honoured for compatibility with existing
/// deployments, mapped onto their configuration keys.
const LEGACY_ENV_KEYS: &[(&str, &str)] = &[
    ("RANDOM_SECRET", "auth.jwt_secret"),
    ("POSTGRES_HOST", "database.host"),
    ("POSTGRES_PORT", "database.port"),
    ("POSTGRES_USERNAME", "database.username"),
    ("POSTGRES_PASSWORD", "database.password"),
    ("POSTGRES_DATABASE", "database.name"),
];

/// Root application configuration.
///
/// Built once at process start and handed to constructors by reference;
/// nothing reads configuration from ambient global state afterwards.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Merges `config/default.toml`, `config/{env}.toml`, variables
    /// prefixed with `COUNTRYDESK_` (sections separated by `__`), and
    /// finally the legacy `RANDOM_SECRET` / `POSTGRES_*` variables.
    pub fn load(env: &str) -> AppResult<Self> {
        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                Environment::with_prefix("COUNTRYDESK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let builder = apply_legacy_env(builder, |name| std::env::var(name).ok())?;
        Self::from_builder(builder)
    }

    /// Build, deserialize, and validate a prepared builder.
    fn from_builder(builder: ConfigBuilder<DefaultState>) -> AppResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the server must not start with.
    pub fn validate(&self) -> AppResult<()> {
        self.auth.validate()?;

        if self.server.port == 0 {
            return Err(AppError::configuration("server.port must be non-zero"));
        }

        Ok(())
    }
}

/// Layer the legacy environment variables on top of the builder.
fn apply_legacy_env<F>(
    mut builder: ConfigBuilder<DefaultState>,
    lookup: F,
) -> AppResult<ConfigBuilder<DefaultState>>
where
    F: Fn(&str) -> Option<String>,
{
    for (var, key) in LEGACY_ENV_KEYS {
        let value = lookup(var).filter(|v| !v.is_empty());
        builder = builder.set_override_option(*key, value)?;
    }
    Ok(builder)
}
