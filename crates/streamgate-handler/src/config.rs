use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServiceConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Max delivery attempts per re-ingestion group
    #[serde(default = "default_max_reingest_attempts")]
    pub max_reingest_attempts: u32,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_reingest_attempts() -> u32 {
    streamgate_domain::DEFAULT_MAX_ATTEMPTS
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Environment::with_prefix("STREAMGATE"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure tests run serially and don't interfere with each other
    static TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_config() {
        let _lock = TEST_LOCK.lock().unwrap();

        // SAFETY: Test runs with mutex lock to prevent concurrent env access
        unsafe {
            std::env::remove_var("STREAMGATE_MAX_REINGEST_ATTEMPTS");
        }

        let config = ServiceConfig::from_env().unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.max_reingest_attempts, 20);
    }

    #[test]
    fn test_custom_config() {
        let _lock = TEST_LOCK.lock().unwrap();

        // SAFETY: Test runs with mutex lock to prevent concurrent env access
        unsafe {
            std::env::set_var("STREAMGATE_MAX_REINGEST_ATTEMPTS", "5");
        }

        let config = ServiceConfig::from_env().unwrap();
        assert_eq!(config.max_reingest_attempts, 5);

        // Clean up
        // SAFETY: Test runs with mutex lock to prevent concurrent env access
        unsafe {
            std::env::remove_var("STREAMGATE_MAX_REINGEST_ATTEMPTS");
        }
    }
}
