//! Configuration management for the givebox donation webhook service.

use std::{net::SocketAddr, str::FromStr};

use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "config.toml";

/// Complete service configuration with defaults, file, and environment
/// overrides.
///
/// Configuration is loaded in priority order:
/// 1. Environment variables (highest priority)
/// 2. Configuration file (`config.toml`)
/// 3. Built-in defaults (lowest priority)
///
/// The database URL and the shared secret have no defaults. Both must be
/// supplied through the file or the environment; the process refuses to
/// start without them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Database
    /// SQLite connection URL, e.g. `sqlite:///data/webhook.db`.
    ///
    /// Environment variable: `DATABASE_URL`
    #[serde(default, alias = "DATABASE_URL")]
    pub database_url: String,
    /// Maximum number of database connections in the pool.
    ///
    /// Environment variable: `DATABASE_MAX_CONNECTIONS`
    #[serde(default = "default_max_connections", alias = "DATABASE_MAX_CONNECTIONS")]
    pub database_max_connections: u32,

    // Auth
    /// Shared secret presented by webhook callers.
    ///
    /// Environment variable: `SECRET_TOKEN`
    #[serde(default, alias = "SECRET_TOKEN")]
    pub secret_token: String,

    // Server
    /// Server bind address.
    ///
    /// Environment variable: `HOST`
    #[serde(default = "default_host", alias = "HOST")]
    pub host: String,
    /// Server bind port.
    ///
    /// Environment variable: `PORT`
    #[serde(default = "default_port", alias = "PORT")]
    pub port: u16,
}

impl Config {
    /// Load configuration from defaults, config file, and environment
    /// variable overrides.
    ///
    /// Configuration priority (highest to lowest):
    /// 1. Environment variables (e.g., `DATABASE_URL`, `SECRET_TOKEN`)
    /// 2. Configuration file (`config.toml`)
    /// 3. Built-in defaults
    ///
    /// # Errors
    ///
    /// Fails when a source cannot be read or when validation rejects the
    /// merged result, in particular when `DATABASE_URL` or `SECRET_TOKEN`
    /// is absent.
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(""));

        let config: Self = figment.extract().context("Failed to load configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Parse server socket address from host and port configuration.
    ///
    /// # Errors
    ///
    /// Fails when host and port do not form a valid socket address.
    pub fn parse_server_addr(&self) -> Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.host, self.port);
        SocketAddr::from_str(&addr_str).context("Invalid server address")
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if self.database_url.is_empty() {
            anyhow::bail!("DATABASE_URL must be set");
        }

        if self.secret_token.is_empty() {
            anyhow::bail!("SECRET_TOKEN must be set");
        }

        if self.port == 0 {
            anyhow::bail!("port must be greater than 0");
        }

        if self.database_max_connections == 0 {
            anyhow::bail!("database max_connections must be greater than 0");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            database_max_connections: default_max_connections(),
            secret_token: String::new(),
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_max_connections() -> u32 {
    5
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, env, sync::Mutex};

    use super::*;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct TestEnvGuard {
        _lock: std::sync::MutexGuard<'static, ()>,
        vars: Vec<String>,
        originals: HashMap<String, Option<String>>,
    }

    impl TestEnvGuard {
        fn new() -> Self {
            let lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            Self { _lock: lock, vars: Vec::new(), originals: HashMap::new() }
        }

        fn set_var(&mut self, key: &str, value: &str) {
            self.save_original(key);
            env::set_var(key, value);
        }

        fn remove_var(&mut self, key: &str) {
            self.save_original(key);
            env::remove_var(key);
        }

        fn save_original(&mut self, key: &str) {
            if !self.vars.contains(&key.to_string()) {
                self.originals.insert(key.to_string(), env::var(key).ok());
                self.vars.push(key.to_string());
            }
        }
    }

    impl Drop for TestEnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                match self.originals.get(var) {
                    Some(Some(value)) => env::set_var(var, value),
                    Some(None) => env::remove_var(var),
                    None => {},
                }
            }
        }
    }

    #[test]
    fn default_config_fails_validation_without_required_values() {
        let config = Config::default();

        assert!(config.validate().is_err());
    }

    #[test]
    fn config_with_required_values_passes_validation() {
        let config = Config {
            database_url: "sqlite://donations.db".to_string(),
            secret_token: "test-secret".to_string(),
            ..Config::default()
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn invalid_config_validation_fails() {
        let valid = Config {
            database_url: "sqlite://donations.db".to_string(),
            secret_token: "test-secret".to_string(),
            ..Config::default()
        };

        // Test invalid port
        let mut config = valid.clone();
        config.port = 0;
        assert!(config.validate().is_err());

        // Reset and test invalid connection count
        config = valid.clone();
        config.database_max_connections = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_loads_with_env_overrides() {
        let mut guard = TestEnvGuard::new();
        guard.set_var("DATABASE_URL", "sqlite:///tmp/givebox-test.db");
        guard.set_var("SECRET_TOKEN", "env-secret");
        guard.set_var("DATABASE_MAX_CONNECTIONS", "12");
        guard.set_var("HOST", "0.0.0.0");
        guard.set_var("PORT", "9090");

        let config = Config::load().expect("Config should load with env overrides");

        assert_eq!(config.database_url, "sqlite:///tmp/givebox-test.db");
        assert_eq!(config.secret_token, "env-secret");
        assert_eq!(config.database_max_connections, 12);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn config_load_fails_without_required_env() {
        let mut guard = TestEnvGuard::new();
        guard.remove_var("DATABASE_URL");
        guard.remove_var("SECRET_TOKEN");
        guard.remove_var("HOST");
        guard.remove_var("PORT");
        guard.remove_var("DATABASE_MAX_CONNECTIONS");

        assert!(Config::load().is_err());
    }

    #[test]
    fn socket_address_parsing() {
        let mut config = Config::default();
        config.host = "127.0.0.1".to_string();
        config.port = 9000;

        let addr = config.parse_server_addr().expect("Should parse socket address");

        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 9000);
    }
}
