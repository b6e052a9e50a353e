//! Server configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.

use poweq_core::dispatch::{AttemptPolicy, Strategy};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable names, one per overridable field.
pub mod env_vars {
    /// Bind address
    pub const HOST: &str = "POWEQ_SERVER_HOST";
    /// Listen port
    pub const PORT: &str = "POWEQ_SERVER_PORT";
    /// Log level
    pub const LOG_LEVEL: &str = "POWEQ_LOG_LEVEL";
    /// Strategy used when a request names none
    pub const DEFAULT_ALGORITHM: &str = "POWEQ_DEFAULT_ALGORITHM";
    /// Largest accepted batch
    pub const MAX_BATCH_SIZE: &str = "POWEQ_MAX_BATCH_SIZE";
    /// Whether failed attempts are returned
    pub const REPORT_FAILURES: &str = "POWEQ_REPORT_FAILURES";
    /// Deployment environment
    pub const ENV: &str = "POWEQ_ENV";
}

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid port number: {0}. Must be between 1 and 65535")]
    InvalidPort(String),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid environment: {0}. Must be one of: development, staging, production")]
    InvalidEnvironment(String),

    #[error("Invalid algorithm: {0}. Must be one of: newton, bisection, auto")]
    InvalidAlgorithm(String),

    #[error("Invalid max batch size: {0}. Must be a positive integer")]
    InvalidBatchSize(String),

    #[error("Invalid boolean for {name}: {value}")]
    InvalidFlag { name: &'static str, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Environment types for configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" | "stage" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(ConfigError::InvalidEnvironment(s.to_string())),
        }
    }
}

impl Environment {
    /// Check if this is a production environment
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Staging => write!(f, "staging"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Server configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Log level
    #[serde(deserialize_with = "deserialize_parsed")]
    pub log_level: LogLevel,
    /// Strategy for requests without an `algorithm`
    #[serde(deserialize_with = "deserialize_algorithm")]
    pub default_algorithm: Strategy,
    /// Largest number of jobs accepted by `/solve/batch`
    pub max_batch_size: usize,
    /// Return failed attempts alongside roots
    pub report_failures: bool,
    /// Environment (development, staging, production)
    #[serde(deserialize_with = "deserialize_parsed")]
    pub environment: Environment,
}

fn deserialize_parsed<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr<Err = ConfigError>,
{
    let s = String::deserialize(deserializer)?;
    T::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_algorithm<'de, D>(deserializer: D) -> Result<Strategy, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_algorithm(&s).map_err(serde::de::Error::custom)
}

fn parse_algorithm(s: &str) -> Result<Strategy, ConfigError> {
    s.parse()
        .map_err(|_| ConfigError::InvalidAlgorithm(s.to_string()))
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: value.to_string(),
        }),
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: LogLevel::Info,
            default_algorithm: Strategy::Auto,
            max_batch_size: 10_000,
            report_failures: true,
            environment: Environment::Development,
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from the process environment over defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Overrides every field whose variable `lookup` returns.
    ///
    /// `lookup` maps a variable name to its value; tests pass a map instead
    /// of mutating the process environment.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(env_vars::HOST) {
            self.host = host;
        }
        if let Some(port) = lookup(env_vars::PORT) {
            self.port = port.parse().map_err(|_| ConfigError::InvalidPort(port))?;
        }
        if let Some(level) = lookup(env_vars::LOG_LEVEL) {
            self.log_level = level.parse()?;
        }
        if let Some(algorithm) = lookup(env_vars::DEFAULT_ALGORITHM) {
            self.default_algorithm = parse_algorithm(&algorithm)?;
        }
        if let Some(size) = lookup(env_vars::MAX_BATCH_SIZE) {
            self.max_batch_size = size
                .parse()
                .map_err(|_| ConfigError::InvalidBatchSize(size))?;
        }
        if let Some(flag) = lookup(env_vars::REPORT_FAILURES) {
            self.report_failures = parse_flag(env_vars::REPORT_FAILURES, &flag)?;
        }
        if let Some(env) = lookup(env_vars::ENV) {
            self.environment = env.parse()?;
        }
        Ok(())
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: ServerConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort(self.port.to_string()));
        }
        if self.max_batch_size == 0 {
            return Err(ConfigError::InvalidBatchSize(
                self.max_batch_size.to_string(),
            ));
        }
        Ok(())
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Attempt policy implied by `report_failures`
    pub fn attempt_policy(&self) -> AttemptPolicy {
        if self.report_failures {
            AttemptPolicy::ReportAll
        } else {
            AttemptPolicy::SuccessesOnly
        }
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(host) = &cli.host {
            self.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.port = port;
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = log_level.parse()?;
        }
        if let Some(algorithm) = &cli.default_algorithm {
            self.default_algorithm = parse_algorithm(algorithm)?;
        }
        if let Some(size) = cli.max_batch_size {
            self.max_batch_size = size;
        }
        Ok(())
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Host address override
    pub host: Option<String>,
    /// Port override
    pub port: Option<u16>,
    /// Log level override
    pub log_level: Option<String>,
    /// Default algorithm override
    pub default_algorithm: Option<String>,
    /// Max batch size override
    pub max_batch_size: Option<usize>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<ServerConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<ServerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.default_algorithm, Strategy::Auto);
        assert_eq!(config.max_batch_size, 10_000);
        assert!(config.report_failures);
        assert_eq!(config.environment, Environment::Development);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Warn").unwrap(), LogLevel::Warn);
        assert!(LogLevel::from_str("loud").is_err());
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(Environment::from_str("dev").unwrap(), Environment::Development);
        assert_eq!(Environment::from_str("stage").unwrap(), Environment::Staging);
        assert_eq!(Environment::from_str("PROD").unwrap(), Environment::Production);
        assert!(Environment::from_str("qa").is_err());
        assert!(Environment::Production.is_production());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ServerConfig::default();
        config
            .apply_env(env(&[
                (env_vars::HOST, "127.0.0.1"),
                (env_vars::PORT, "3000"),
                (env_vars::DEFAULT_ALGORITHM, "Newton"),
                (env_vars::MAX_BATCH_SIZE, "50"),
                (env_vars::REPORT_FAILURES, "false"),
                (env_vars::ENV, "production"),
            ]))
            .unwrap();

        assert_eq!(config.socket_addr(), "127.0.0.1:3000");
        assert_eq!(config.default_algorithm, Strategy::Newton);
        assert_eq!(config.max_batch_size, 50);
        assert_eq!(config.attempt_policy(), AttemptPolicy::SuccessesOnly);
        assert_eq!(config.environment, Environment::Production);
    }

    #[test]
    fn test_env_rejects_bad_values() {
        let mut config = ServerConfig::default();
        assert!(matches!(
            config.apply_env(env(&[(env_vars::PORT, "http")])),
            Err(ConfigError::InvalidPort(_))
        ));
        assert!(matches!(
            config.apply_env(env(&[(env_vars::DEFAULT_ALGORITHM, "secant")])),
            Err(ConfigError::InvalidAlgorithm(_))
        ));
        assert!(matches!(
            config.apply_env(env(&[(env_vars::REPORT_FAILURES, "maybe")])),
            Err(ConfigError::InvalidFlag { .. })
        ));
    }

    #[test]
    fn test_validate() {
        let mut config = ServerConfig::default();
        config.port = 0;
        assert!(config.validate().is_err());

        config.port = 8080;
        config.max_batch_size = 0;
        assert!(config.validate().is_err());

        config.max_batch_size = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            host = "127.0.0.1"
            port = 3000
            log_level = "debug"
            default_algorithm = "bisection"
            max_batch_size = 500
            report_failures = false
            environment = "staging"
        "#;

        let config: ServerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.default_algorithm, Strategy::Bisection);
        assert_eq!(config.max_batch_size, 500);
        assert!(!config.report_failures);
        assert_eq!(config.environment, Environment::Staging);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config: ServerConfig = toml::from_str("port = 9000").unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.default_algorithm, Strategy::Auto);
    }

    #[test]
    fn test_toml_rejects_unknown_algorithm() {
        let result: Result<ServerConfig, _> = toml::from_str(r#"default_algorithm = "secant""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_priority_cli_over_env_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = 4000\nhost = \"10.0.0.1\"\nmax_batch_size = 7").unwrap();

        let cli = CliArgs {
            config_file: Some(file.path().to_path_buf()),
            port: Some(5000),
            ..Default::default()
        };
        let config = build_config_with(
            &cli,
            env(&[(env_vars::PORT, "4500"), (env_vars::HOST, "10.0.0.2")]),
        )
        .unwrap();

        assert_eq!(config.port, 5000);
        assert_eq!(config.host, "10.0.0.2");
        assert_eq!(config.max_batch_size, 7);
    }

    #[test]
    fn test_build_config_with_defaults() {
        let config = build_config_with(&CliArgs::default(), |_| None).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_cli_rejects_unknown_log_level() {
        let cli = CliArgs {
            log_level: Some("loud".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            build_config_with(&cli, |_| None),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }
}
