use std::net::SocketAddr;

use anyhow::{Context, Result};

const DEFAULT_DATABASE_URL: &str = "sqlite://app.db?mode=rwc";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5555;
const DEFAULT_LOG_FILTER: &str = "bakery_api=info,tower_http=info";

/// Runtime configuration, read from the environment.
///
/// Every field has a default, so an empty environment yields a server on
/// `127.0.0.1:5555` backed by `app.db` in the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Indent JSON bodies instead of emitting them compact
    pub pretty_json: bool,
    /// Apply pending migrations before serving
    pub migrate_on_start: bool,
    /// Forward sqlx statement logs to `tracing`
    pub sql_logging: bool,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_owned(),
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            pretty_json: true,
            migrate_on_start: true,
            sql_logging: false,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// Callers wanting `.env` support should run `dotenvy::dotenv()` first.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got `{raw}`"))?,
            None => defaults.port,
        };

        Ok(Self {
            database_url: var("DATABASE_URL").unwrap_or(defaults.database_url),
            host: var("HOST").unwrap_or(defaults.host),
            port,
            pretty_json: parse_flag("PRETTY_JSON", var("PRETTY_JSON"), defaults.pretty_json)?,
            migrate_on_start: parse_flag(
                "MIGRATE_ON_START",
                var("MIGRATE_ON_START"),
                defaults.migrate_on_start,
            )?,
            sql_logging: parse_flag("SQL_LOGGING", var("SQL_LOGGING"), defaults.sql_logging)?,
            log_filter: var("RUST_LOG").unwrap_or(defaults.log_filter),
        })
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

fn parse_flag(key: &str, raw: Option<String>, default: bool) -> Result<bool> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => anyhow::bail!("{key} must be a boolean, got `{raw}`"),
    }
}
