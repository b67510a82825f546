//! Service configuration
//!
//! Read from the process environment after `.env` has been loaded.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8001;
pub const DEFAULT_DB_PATH: &str = "predictions.db";
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_HISTORY_LIMIT: usize = 50;
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}' ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub db_path: PathBuf,
    pub llm_base_url: String,
    /// When unset, explanations use the static fallback text.
    pub llm_api_key: Option<String>,
    pub llm_model: String,
    pub llm_timeout: Duration,
    pub history_limit: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            llm_base_url: DEFAULT_LLM_BASE_URL.to_string(),
            llm_api_key: None,
            llm_model: DEFAULT_LLM_MODEL.to_string(),
            llm_timeout: Duration::from_secs(DEFAULT_LLM_TIMEOUT_SECS),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source. Empty values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Ok(Self {
            bind_addr: parse_or("BIND_ADDR", get("BIND_ADDR"), defaults.bind_addr)?,
            db_path: get("PREDICTION_DB_PATH").map(PathBuf::from).unwrap_or(defaults.db_path),
            llm_base_url: get("LLM_BASE_URL").unwrap_or(defaults.llm_base_url),
            llm_api_key: get("LLM_API_KEY"),
            llm_model: get("LLM_MODEL").unwrap_or(defaults.llm_model),
            llm_timeout: Duration::from_secs(parse_or(
                "LLM_TIMEOUT_SECS",
                get("LLM_TIMEOUT_SECS"),
                DEFAULT_LLM_TIMEOUT_SECS,
            )?),
            history_limit: parse_or("HISTORY_LIMIT", get("HISTORY_LIMIT"), defaults.history_limit)?,
        })
    }
}

fn parse_or<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<ServiceConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServiceConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg, ServiceConfig::default());
        assert_eq!(cfg.bind_addr.port(), 8001);
        assert!(cfg.llm_api_key.is_none());
    }

    #[test]
    fn test_overrides() {
        let cfg = config(&[
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("PREDICTION_DB_PATH", "/tmp/p.db"),
            ("LLM_API_KEY", "sk-test"),
            ("LLM_MODEL", "llama3"),
            ("HISTORY_LIMIT", "10"),
            ("LLM_TIMEOUT_SECS", "5"),
        ])
        .unwrap();
        assert_eq!(cfg.bind_addr.port(), 9000);
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/p.db"));
        assert_eq!(cfg.llm_api_key.as_deref(), Some("sk-test"));
        assert_eq!(cfg.llm_model, "llama3");
        assert_eq!(cfg.history_limit, 10);
        assert_eq!(cfg.llm_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_empty_value_is_unset() {
        let cfg = config(&[("LLM_API_KEY", "  ")]).unwrap();
        assert!(cfg.llm_api_key.is_none());
    }

    #[test]
    fn test_invalid_value_reports_variable() {
        let err = config(&[("HISTORY_LIMIT", "lots")]).unwrap_err();
        assert!(err.to_string().contains("HISTORY_LIMIT"));
        assert!(config(&[("BIND_ADDR", "nowhere")]).is_err());
    }
}
