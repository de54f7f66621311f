//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use social_infra::DatabaseConfig;

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 9999;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs the server on the in-memory store.
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let database = Self::database_url(&var).map(|url| DatabaseConfig {
            url,
            max_connections: parse_var(&var, "DB_MAX_CONNECTIONS").unwrap_or(10),
            min_connections: parse_var(&var, "DB_MIN_CONNECTIONS").unwrap_or(1),
            schema: var("DB_SCHEMA"),
        });

        Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_var(&var, "PORT").unwrap_or(DEFAULT_PORT),
            database,
        }
    }

    /// `DATABASE_URL` wins; otherwise the URL is composed from `DB_*`
    /// credentials when `DB_HOST` is set.
    fn database_url(var: &impl Fn(&str) -> Option<String>) -> Option<String> {
        if let Some(url) = var("DATABASE_URL") {
            return Some(url);
        }

        let host = var("DB_HOST")?;
        let port = parse_var(var, "DB_PORT").unwrap_or(5432);
        let user = var("DB_USER").unwrap_or_else(|| "app".to_string());
        let password = var("DB_PASSWORD").unwrap_or_else(|| "pass".to_string());
        let name = var("DB_NAME").unwrap_or_else(|| "social".to_string());

        Some(DatabaseConfig::postgres_url(
            &host, port, &user, &password, &name,
        ))
    }
}

fn parse_var<T: FromStr>(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    var(key).and_then(|v| v.parse().ok())
}
