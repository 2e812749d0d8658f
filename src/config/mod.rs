//! Configuration handling for the service.
//!
//! Every setting has a default matching the values the scraper has always
//! run with, so `Config::from_env` works with an empty environment. Variables
//! only override those defaults; anything that fails to parse is reported as a
//! `ConfigError` at startup.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

use url::Url;

/// Environment variable names.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_SEARCH_URL: &str = "SEARCH_URL";
pub const ENV_REFRESH_INTERVAL_SECS: &str = "REFRESH_INTERVAL_SECS";
pub const ENV_RETRY_COOLDOWN_SECS: &str = "RETRY_COOLDOWN_SECS";
pub const ENV_FETCH_TIMEOUT_SECS: &str = "FETCH_TIMEOUT_SECS";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_SEARCH_URL: &str = "https://uk.indeed.com/jobs?q=visa+sponsorship&l=United+Kingdom";
const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 3600;
const DEFAULT_RETRY_COOLDOWN_SECS: u64 = 300;
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
    search_url: Url,
    refresh_interval: Duration,
    retry_cooldown: Duration,
    fetch_timeout: Duration,
    log_format: LogFormat,
}

impl Config {
    /// Load from environment variables, falling back to the built-in defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let search_url = env::var(ENV_SEARCH_URL).unwrap_or_else(|_| DEFAULT_SEARCH_URL.to_string());
        let search_url = Url::parse(&search_url).map_err(|e| ConfigError::InvalidValue {
            field: ENV_SEARCH_URL,
            reason: e.to_string(),
        })?;

        let log_format = match env::var(ENV_LOG_FORMAT).ok().as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    field: ENV_LOG_FORMAT,
                    reason: format!("expected 'pretty' or 'json', got '{}'", other),
                });
            }
        };

        Ok(Self {
            bind_addr,
            search_url,
            refresh_interval: secs_from_env(ENV_REFRESH_INTERVAL_SECS, DEFAULT_REFRESH_INTERVAL_SECS)?,
            retry_cooldown: secs_from_env(ENV_RETRY_COOLDOWN_SECS, DEFAULT_RETRY_COOLDOWN_SECS)?,
            fetch_timeout: secs_from_env(ENV_FETCH_TIMEOUT_SECS, DEFAULT_FETCH_TIMEOUT_SECS)?,
            log_format,
        })
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    /// Job board search page scraped on every cycle.
    pub fn search_url(&self) -> &Url {
        &self.search_url
    }
    /// Delay between successful refresh cycles.
    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }
    /// Delay after a cycle that failed unexpectedly.
    pub fn retry_cooldown(&self) -> Duration {
        self.retry_cooldown
    }
    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }
    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

fn secs_from_env(key: &'static str, default: u64) -> Result<Duration, ConfigError> {
    let Ok(raw) = env::var(key) else {
        return Ok(Duration::from_secs(default));
    };
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::InvalidValue {
            field: key,
            reason: "must be greater than zero".to_string(),
        }),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(ConfigError::InvalidValue {
            field: key,
            reason: e.to_string(),
        }),
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests touching the process environment must not interleave.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for key in [
            ENV_BIND_ADDR,
            ENV_SEARCH_URL,
            ENV_REFRESH_INTERVAL_SECS,
            ENV_RETRY_COOLDOWN_SECS,
            ENV_FETCH_TIMEOUT_SECS,
            ENV_LOG_FORMAT,
        ] {
            unsafe {
                env::remove_var(key);
            }
        }
    }

    #[test]
    fn defaults_when_env_missing() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.bind_addr(), DEFAULT_BIND_ADDR);
        assert_eq!(cfg.search_url().as_str(), DEFAULT_SEARCH_URL);
        assert_eq!(cfg.refresh_interval(), Duration::from_secs(3600));
        assert_eq!(cfg.retry_cooldown(), Duration::from_secs(300));
        assert_eq!(cfg.fetch_timeout(), Duration::from_secs(10));
        assert_eq!(cfg.log_format(), LogFormat::Pretty);
    }

    #[test]
    fn overrides_when_env_present() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        unsafe {
            env::set_var(ENV_BIND_ADDR, "127.0.0.1:9000");
            env::set_var(ENV_SEARCH_URL, "http://localhost:8081/jobs?q=test");
            env::set_var(ENV_REFRESH_INTERVAL_SECS, "60");
            env::set_var(ENV_RETRY_COOLDOWN_SECS, "5");
            env::set_var(ENV_FETCH_TIMEOUT_SECS, "2");
            env::set_var(ENV_LOG_FORMAT, "json");
        }
        let cfg = Config::from_env().unwrap();
        clear_env();
        assert_eq!(cfg.bind_addr(), "127.0.0.1:9000");
        assert_eq!(cfg.search_url().as_str(), "http://localhost:8081/jobs?q=test");
        assert_eq!(cfg.refresh_interval(), Duration::from_secs(60));
        assert_eq!(cfg.retry_cooldown(), Duration::from_secs(5));
        assert_eq!(cfg.fetch_timeout(), Duration::from_secs(2));
        assert_eq!(cfg.log_format(), LogFormat::Json);
    }

    #[test]
    fn rejects_invalid_values() {
        let _guard = ENV_MUTEX.lock().unwrap();

        clear_env();
        unsafe {
            env::set_var(ENV_SEARCH_URL, "not a url");
        }
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains(ENV_SEARCH_URL));

        clear_env();
        unsafe {
            env::set_var(ENV_REFRESH_INTERVAL_SECS, "0");
        }
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("greater than zero"));

        clear_env();
        unsafe {
            env::set_var(ENV_LOG_FORMAT, "xml");
        }
        assert!(Config::from_env().is_err());
        clear_env();
    }
}
