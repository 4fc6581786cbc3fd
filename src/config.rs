use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;

use crate::consts;
use crate::errors::ShimError;

#[derive(Debug, Serialize, Clone)]
pub struct Config {
    pub model_name: String,
    pub api_endpoint: String,
    #[serde(skip_serializing)]
    pub auth_token: Option<String>,
    pub temperature: f64,
    pub top_p: f64,
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_body_bytes: usize,
}

impl Config {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_name: consts::DEFAULT_MODEL_NAME.to_string(),
            api_endpoint: consts::DEFAULT_API_ENDPOINT.to_string(),
            auth_token: None,
            temperature: consts::DEFAULT_TEMPERATURE,
            top_p: consts::DEFAULT_TOP_P,
            host: consts::SERVER_HOST.to_string(),
            port: consts::SERVER_PORT,
            workers: consts::SERVER_WORKERS,
            connect_timeout_secs: consts::CONNECT_TIMEOUT_SECS,
            request_timeout_secs: consts::REQUEST_TIMEOUT_SECS,
            max_body_bytes: consts::MAX_BODY_BYTES,
        }
    }
}

pub trait ConfigLoader: Send + Sync {
    fn load_config(&self) -> Result<Config, ShimError>;
}

/// Reads configuration from environment variables, falling back to literal defaults.
pub struct EnvConfigLoader {
    vars: HashMap<String, String>,
}

impl EnvConfigLoader {
    pub fn new() -> Self {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    fn get_string(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_string()
    }

    fn get_parsed<T>(&self, key: &str, default: T) -> Result<T, ShimError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(key) {
            Some(raw) => raw
                .parse()
                .map_err(|e| ShimError::ConfigError(format!("{key}={raw:?}: {e}"))),
            None => Ok(default),
        }
    }
}

impl Default for EnvConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader for EnvConfigLoader {
    fn load_config(&self) -> Result<Config, ShimError> {
        let config = Config {
            model_name: self.get_string("OLLAMA_MODEL_NAME", consts::DEFAULT_MODEL_NAME),
            api_endpoint: self.get_string("OLLAMA_API_ENDPOINT", consts::DEFAULT_API_ENDPOINT),
            auth_token: self.get("OLLAMA_AUTH_TOKEN").map(str::to_string),
            temperature: self.get_parsed("OLLAMA_TEMPERATURE", consts::DEFAULT_TEMPERATURE)?,
            top_p: self.get_parsed("OLLAMA_TOP_P", consts::DEFAULT_TOP_P)?,
            host: self.get_string("SHIM_HOST", consts::SERVER_HOST),
            port: self.get_parsed("SHIM_PORT", consts::SERVER_PORT)?,
            workers: self.get_parsed("SHIM_WORKERS", consts::SERVER_WORKERS)?,
            connect_timeout_secs: self
                .get_parsed("OLLAMA_CONNECT_TIMEOUT_SECS", consts::CONNECT_TIMEOUT_SECS)?,
            request_timeout_secs: self
                .get_parsed("OLLAMA_REQUEST_TIMEOUT_SECS", consts::REQUEST_TIMEOUT_SECS)?,
            max_body_bytes: self.get_parsed("SHIM_MAX_BODY_BYTES", consts::MAX_BODY_BYTES)?,
        };

        if config.workers == 0 {
            return Err(ShimError::ConfigError(
                "SHIM_WORKERS must be at least 1".to_string(),
            ));
        }

        Ok(config)
    }
}

pub fn load_config() -> Result<Config, ShimError> {
    let loader = EnvConfigLoader::new();
    loader.load_config()
}
