use std::{path::PathBuf, time::Duration};

use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{DEFAULT_CONFIG_DIR, EVENT_STREAM_MAX_LEN, env, prod};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
    pub redis: RedisSettings,
    pub events: EventSettings,
    pub metrics: MetricsSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub address: String,
    pub request_timeout_millis: u64,
}

impl ApplicationSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_millis)
    }
}

/// Without a url the service keeps users in memory.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: Option<Secret<String>>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedisSettings {
    pub host_name: String,
    pub enabled: bool,
}

impl RedisSettings {
    pub fn url(&self) -> String {
        format!("redis://{}/", self.host_name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventSettings {
    pub enabled: bool,
    /// Whether `USERS.created` carries the plaintext credential.
    pub include_credential: bool,
    pub stream_max_len: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    pub enabled: bool,
    pub address: String,
}

impl Settings {
    /// Defaults, then `config/base.json` and `config/local.json` when present,
    /// then `ROSTER__SECTION__KEY` variables. `DATABASE_URL` and
    /// `REDIS_HOST_NAME` are honored as well.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config_dir = std::env::var(env::CONFIG_DIR_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR));

        Self::defaults()?
            .add_source(File::from(config_dir.join("base")).required(false))
            .add_source(File::from(config_dir.join("local")).required(false))
            .add_source(
                Environment::with_prefix(env::ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .set_override_option(
                "database.url",
                std::env::var(env::DATABASE_URL_ENV_VAR).ok(),
            )?
            .set_override_option(
                "redis.host_name",
                std::env::var(env::REDIS_HOST_NAME_ENV_VAR).ok(),
            )?
            .build()?
            .try_deserialize()
    }

    /// Settings made of the built-in defaults only.
    pub fn default_settings() -> Result<Self, ConfigError> {
        Self::defaults()?.build()?.try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("application.address", prod::APP_ADDRESS)?
            .set_default(
                "application.request_timeout_millis",
                prod::REQUEST_TIMEOUT_MILLIS,
            )?
            .set_default("database.max_connections", 5)?
            .set_default("redis.host_name", "127.0.0.1")?
            .set_default("redis.enabled", false)?
            .set_default("events.enabled", false)?
            .set_default("events.include_credential", false)?
            .set_default("events.stream_max_len", EVENT_STREAM_MAX_LEN as u64)?
            .set_default("metrics.enabled", true)?
            .set_default("metrics.address", prod::METRICS_ADDRESS)
    }
}
