//! Session configuration loading from file and environment variables.

use serde::Deserialize;
use thiserror::Error;

/// Top-level session-core configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Credential issuer settings.
    #[serde(default)]
    pub issuer: IssuerConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Credential issuer and room endpoints.
///
/// Both URLs are opaque strings threaded through to the issuer client and the
/// transport; no parsing happens in this core.
#[derive(Debug, Clone, Deserialize)]
pub struct IssuerConfig {
    /// Endpoint that issues session credentials.
    #[serde(default = "default_token_url")]
    pub token_url: String,

    /// Room server URL handed to the transport along with the credential.
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Timeout for the credential request, in seconds.
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "intervox_session=debug,info").
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_token_url() -> String {
    "http://localhost:5002/token".to_string()
}

fn default_server_url() -> String {
    "ws://localhost:7880".to_string()
}

fn default_request_timeout_seconds() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for IssuerConfig {
    fn default() -> Self {
        Self {
            token_url: default_token_url(),
            server_url: default_server_url(),
            request_timeout_seconds: default_request_timeout_seconds(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads configuration from a TOML file, falling back to defaults.
///
/// Environment variable overrides:
/// - `INTERVOX_TOKEN_URL` overrides `issuer.token_url`
/// - `INTERVOX_SERVER_URL` overrides `issuer.server_url`
/// - `INTERVOX_LOG_LEVEL` overrides `logging.level`
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = p, "config file not found, using defaults");
                Config::default()
            }
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => Config::default(),
    };

    // Environment variable overrides
    if let Ok(url) = std::env::var("INTERVOX_TOKEN_URL") {
        config.issuer.token_url = url;
    }
    if let Ok(url) = std::env::var("INTERVOX_SERVER_URL") {
        config.issuer.server_url = url;
    }
    if let Ok(level) = std::env::var("INTERVOX_LOG_LEVEL") {
        config.logging.level = level;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_filled_in() {
        let config = Config::default();
        assert_eq!(config.issuer.token_url, "http://localhost:5002/token");
        assert_eq!(config.issuer.server_url, "ws://localhost:7880");
        assert_eq!(config.issuer.request_timeout_seconds, 10);
        assert_eq!(config.logging.level, "info");
    }

    // Env vars are process-global and tests run in parallel, so everything
    // touching INTERVOX_* lives in this one test.
    #[test]
    fn file_values_load_and_env_overrides_win() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("intervox.toml");
        std::fs::write(
            &path,
            r#"
            [issuer]
            token_url = "https://issuer.example.com/token"
            server_url = "wss://rooms.example.com"
            "#,
        )
        .expect("should write config file");

        std::env::set_var("INTERVOX_TOKEN_URL", "https://eu.issuer.example.com/token");
        std::env::set_var("INTERVOX_LOG_LEVEL", "debug");
        let config = load_config(path.to_str()).expect("config should load");
        std::env::remove_var("INTERVOX_TOKEN_URL");
        std::env::remove_var("INTERVOX_LOG_LEVEL");

        // Env beats file, file beats default, default fills the rest.
        assert_eq!(config.issuer.token_url, "https://eu.issuer.example.com/token");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.issuer.server_url, "wss://rooms.example.com");
        assert_eq!(config.issuer.request_timeout_seconds, 10);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("absent.toml");
        let config =
            load_config(path.to_str()).expect("a missing file should not be an error");
        // token_url/server_url may be overridden by the env test running in
        // parallel; the timeout has no override and proves the fallback.
        assert_eq!(config.issuer.request_timeout_seconds, 10);
    }

    #[test]
    fn unparsable_file_is_an_error() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("intervox.toml");
        std::fs::write(&path, "issuer = \"not a table\"").expect("should write config file");

        let err = load_config(path.to_str()).expect_err("bad toml should be rejected");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn partial_toml_keeps_defaults_for_missing_fields() {
        let config: Config = toml::from_str(
            r#"
            [issuer]
            token_url = "https://issuer.example.com/token"
            "#,
        )
        .expect("partial config should parse");

        assert_eq!(config.issuer.token_url, "https://issuer.example.com/token");
        assert_eq!(config.issuer.server_url, "ws://localhost:7880");
        assert_eq!(config.logging.level, "info");
    }
}
