//! Server configuration, loaded from environment variables at startup.

use crate::entities::StoreConfig;

/// Runtime configuration for kindwords-server.
///
/// Every field has a default so the server starts without any environment
/// variables set.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to bind (default: `"0.0.0.0:5000"`).
    pub bind_address: String,

    /// SQLite database URL (default: `"sqlite://chat.db"`).
    /// The file is created on first start if it does not exist.
    pub database_url: String,

    /// How many of the most recent messages `GET /api/history` returns.
    pub history_limit: u32,

    /// `tracing` filter string, e.g. `"info"` or `"debug,sqlx=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Mount Swagger UI at `/swagger-ui` (default: `true`).
    pub enable_swagger: bool,
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            bind_address: env_or("KINDWORDS_BIND", "0.0.0.0:5000"),
            database_url: env_or("KINDWORDS_DATABASE_URL", "sqlite://chat.db"),
            history_limit: parse_env("KINDWORDS_HISTORY_LIMIT", StoreConfig::DEFAULT_HISTORY_LIMIT),
            log_level: env_or("KINDWORDS_LOG", "info"),
            log_json: env_flag("KINDWORDS_LOG_JSON", false),
            enable_swagger: env_flag("KINDWORDS_ENABLE_SWAGGER", true),
        }
    }

    /// The subset of settings the message store needs.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            history_limit: self.history_limit,
            ..StoreConfig::new(self.database_url.clone())
        }
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_flag(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unset_variables_fall_back_to_defaults() {
        assert_eq!(env_or("KINDWORDS_TEST_UNSET_STRING", "x"), "x");
        assert_eq!(parse_env("KINDWORDS_TEST_UNSET_NUMBER", 7u32), 7);
        assert!(env_flag("KINDWORDS_TEST_UNSET_FLAG", true));
        assert!(!env_flag("KINDWORDS_TEST_UNSET_FLAG", false));
    }

    #[test]
    fn store_config_carries_url_and_limit() {
        let cfg = Config {
            bind_address: "127.0.0.1:0".into(),
            database_url: "sqlite://test.db".into(),
            history_limit: 25,
            log_level: "info".into(),
            log_json: false,
            enable_swagger: false,
        };
        assert_eq!(
            cfg.store_config(),
            StoreConfig {
                database_url: "sqlite://test.db".into(),
                history_limit: 25,
            }
        );
    }
}
