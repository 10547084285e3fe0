use serde::Deserialize;
use anyhow::Result;
use std::env;
use std::time::Duration;
use crate::constants::{DEFAULT_RETRY_INTERVAL_SECS, DEFAULT_TIMEOUT_SECS};
use crate::Error;

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub connection_timeout: u64,
    pub retry_interval: u64,
    pub use_ssl: bool,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| Error::Config(format!("{} not set", key)))
        };

        Ok(Self {
            host: required("COUNTRY_DB_HOST")?,
            port: required("COUNTRY_DB_PORT")?
                .parse()
                .map_err(|_| Error::Config("Invalid COUNTRY_DB_PORT format".to_string()))?,
            user: required("COUNTRY_DB_USER")?,
            password: required("COUNTRY_DB_PASSWORD")?,
            database: required("COUNTRY_DB_DATABASE")?,
            connection_timeout: lookup("COUNTRY_DB_TIMEOUT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            retry_interval: lookup("COUNTRY_DB_RETRY_INTERVAL")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_RETRY_INTERVAL_SECS),
            use_ssl: lookup("COUNTRY_DB_SSL")
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        })
    }

    pub fn connection_timeout(&self) -> Duration {
        Duration::from_secs(self.connection_timeout)
    }

    pub fn retry_interval(&self) -> Duration {
        Duration::from_secs(self.retry_interval)
    }
}
