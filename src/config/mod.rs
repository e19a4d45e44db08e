use anyhow::Result;
use dotenvy::dotenv;
use serde::Deserialize;

use crate::error::AppError;

fn default_max_connections() -> u32 {
    5
}

/// Configuration for the application
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Database connection URL, only needed when talking to PostgreSQL
    pub database_url: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// This function will:
    /// 1. Load variables from .env file if it exists
    /// 2. Deserialize environment variables into Config struct
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let config = envy::from_env::<Config>()?;

        Ok(config)
    }

    /// Build a config from explicit `KEY=value` pairs instead of the process environment.
    #[cfg(test)]
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter::<_, Config>(vars)?)
    }

    pub fn database_url(&self) -> Result<&str, AppError> {
        self.database_url
            .as_deref()
            .ok_or_else(|| AppError::Config("DATABASE_URL is not set; pass --database-url or --memory".to_string()))
    }
}

/// Initialize environment variables and load configuration
pub fn init() -> Result<Config> {
    Config::load()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn reads_url_and_pool_size() {
        let config = Config::from_vars(vars(&[
            ("DATABASE_URL", "postgres://localhost/projects"),
            ("MAX_CONNECTIONS", "2"),
        ]))
        .unwrap();

        assert_eq!(config.database_url().unwrap(), "postgres://localhost/projects");
        assert_eq!(config.max_connections, 2);
    }

    #[test]
    fn pool_size_defaults_and_url_is_optional() {
        let config = Config::from_vars(Vec::new()).unwrap();

        assert_eq!(config.max_connections, 5);
        assert_matches!(config.database_url(), Err(AppError::Config(_)));
    }
}
