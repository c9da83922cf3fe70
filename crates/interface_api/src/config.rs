//! API configuration

use std::time::Duration;

use serde::Deserialize;

use infra_db::DatabaseConfig;

/// API configuration
///
/// Every field can be overridden with an `API_`-prefixed environment
/// variable, e.g. `API_PORT=9000` or `API_LOG_JSON=true`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database URL
    pub database_url: String,
    /// Maximum pool size
    pub max_connections: u32,
    /// Minimum idle connections kept open
    pub min_connections: u32,
    /// Seconds to wait for a pooled connection
    pub connect_timeout_secs: u64,
    /// Log level or `EnvFilter` directive, used when `RUST_LOG` is unset
    pub log_level: String,
    /// Emit logs as JSON lines instead of plain text
    pub log_json: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "postgres://localhost/oppositions".to_string(),
            max_connections: 10,
            min_connections: 2,
            connect_timeout_secs: 30,
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_*` environment variables over the defaults
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_source(config::Environment::with_prefix("API").try_parsing(true))
    }

    fn from_source<S>(source: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("database_url", defaults.database_url)?
            .set_default("max_connections", i64::from(defaults.max_connections))?
            .set_default("min_connections", i64::from(defaults.min_connections))?
            .set_default("connect_timeout_secs", defaults.connect_timeout_secs as i64)?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_json", defaults.log_json)?
            .add_source(source)
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Pool settings for `infra_db::create_pool`
    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig::new(&self.database_url)
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_vars(vars: &[(&str, &str)]) -> ApiConfig {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_source(
            config::Environment::with_prefix("API")
                .try_parsing(true)
                .source(Some(env)),
        )
        .unwrap()
    }

    #[test]
    fn test_defaults_apply_without_environment() {
        assert_eq!(from_vars(&[]), ApiConfig::default());
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let config = from_vars(&[
            ("API_PORT", "9000"),
            ("API_DATABASE_URL", "postgres://db/oppositions"),
            ("API_LOG_JSON", "true"),
        ]);

        assert_eq!(config.port, 9000);
        assert_eq!(config.database_url, "postgres://db/oppositions");
        assert!(config.log_json);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.server_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_database_config_carries_pool_settings() {
        let config = ApiConfig {
            max_connections: 4,
            connect_timeout_secs: 5,
            ..ApiConfig::default()
        };
        let db = config.database_config();

        assert_eq!(db.url, config.database_url);
        assert_eq!(db.max_connections, 4);
        assert_eq!(db.min_connections, 2);
        assert_eq!(db.connect_timeout, Duration::from_secs(5));
    }
}
