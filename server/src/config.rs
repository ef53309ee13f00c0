//! Runtime configuration read from the environment.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),

    #[error("invalid boolean for {name}: {value}")]
    InvalidFlag { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub seed_sample_data: bool,
    /// Allowed CORS origins. Empty disables the layer, `*` allows any origin.
    pub cors_origins: Vec<String>,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            environment: "development".to_string(),
            seed_sample_data: true,
            cors_origins: vec!["http://localhost:3000".to_string()],
            log_format: LogFormat::Text,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, falling back to defaults
    /// for unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => defaults.port,
        };

        let seed_sample_data = match lookup("SEED_SAMPLE_DATA") {
            Some(raw) => parse_flag("SEED_SAMPLE_DATA", &raw)?,
            None => defaults.seed_sample_data,
        };

        let cors_origins = match lookup("CORS_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            None => defaults.cors_origins,
        };

        let log_format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            environment: lookup("APP_ENV").unwrap_or(defaults.environment),
            seed_sample_data,
            cors_origins,
            log_format,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.environment, "development");
        assert!(config.seed_sample_data);
        assert_eq!(config.cors_origins, vec!["http://localhost:3000"]);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("APP_ENV", "production"),
            ("SEED_SAMPLE_DATA", "false"),
            ("CORS_ORIGINS", "https://a.example, https://b.example"),
            ("LOG_FORMAT", "JSON"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.environment, "production");
        assert!(!config.seed_sample_data);
        assert_eq!(
            config.cors_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn empty_cors_origins_disable_cors() {
        let config = config_from(&[("CORS_ORIGINS", "")]).unwrap();
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn rejects_bad_port() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("eighty".to_string()));
    }

    #[test]
    fn rejects_bad_flag() {
        let err = config_from(&[("SEED_SAMPLE_DATA", "maybe")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFlag { name: "SEED_SAMPLE_DATA", .. }));
    }
}
