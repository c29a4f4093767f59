//! Process configuration
//!
//! Read once at startup (after `.env` has been loaded) and handed to every
//! component constructor. Nothing in the crate looks configuration up on its own.

use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gpt-4-turbo";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;
pub const DEFAULT_RESPONSE_LANGUAGE: &str = "Korean";
pub const DEFAULT_UNIVERSE: [&str; 5] = ["AAPL", "GOOGL", "MSFT", "AMZN", "TSLA"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value '{value}'")]
    InvalidValue { var: &'static str, value: String },

    #[error("invalid backend base URL '{value}': {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("symbol universe is empty")]
    EmptyUniverse,
}

/// Settings for the language-model backend
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// `None` is a valid state: every decision request degrades to no decision.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
    pub timeout: Duration,
    pub response_language: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            response_language: DEFAULT_RESPONSE_LANGUAGE.to_string(),
        }
    }
}

impl LlmConfig {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Base URL parsed and normalised with a trailing slash so that joining
    /// `chat/completions` keeps any path prefix such as `/v1`.
    pub fn base_url(&self) -> Result<url::Url, ConfigError> {
        let mut raw = self.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        url::Url::parse(&raw).map_err(|source| ConfigError::InvalidUrl {
            value: self.base_url.clone(),
            source,
        })
    }
}

#[derive(Debug, Clone)]
pub struct PathsConfig {
    pub data_dir: PathBuf,
    pub reports_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            reports_dir: PathBuf::from("data").join("reports"),
            log_dir: PathBuf::from("logs"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub llm: LlmConfig,
    pub paths: PathsConfig,
    pub universe: Vec<String>,
    /// Number of symbols whose decision calls may be in flight at once.
    pub decision_concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "dev".to_string(),
            llm: LlmConfig::default(),
            paths: PathsConfig::default(),
            universe: DEFAULT_UNIVERSE.iter().map(|s| s.to_string()).collect(),
            decision_concurrency: 1,
        }
    }
}

impl Config {
    /// Build configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Config::default();

        let temperature = match get("LLM_TEMPERATURE") {
            Some(raw) => raw.parse::<f32>().map_err(|_| ConfigError::InvalidValue {
                var: "LLM_TEMPERATURE",
                value: raw,
            })?,
            None => DEFAULT_TEMPERATURE,
        };

        let timeout_seconds = match get("LLM_TIMEOUT_SECONDS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: "LLM_TIMEOUT_SECONDS",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_TIMEOUT_SECONDS,
        };

        let decision_concurrency = match get("DECISION_CONCURRENCY") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: "DECISION_CONCURRENCY",
                        value: raw,
                    })
                }
            },
            None => defaults.decision_concurrency,
        };

        let universe = match get("SYMBOLS") {
            Some(raw) => {
                let symbols: Vec<String> = raw
                    .split(',')
                    .map(|s| s.trim().to_uppercase())
                    .filter(|s| !s.is_empty())
                    .collect();
                if symbols.is_empty() {
                    return Err(ConfigError::EmptyUniverse);
                }
                symbols
            }
            None => defaults.universe,
        };

        let data_dir = get("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.paths.data_dir);
        let reports_dir = get("REPORTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("reports"));
        let log_dir = get("LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.paths.log_dir);

        let llm = LlmConfig {
            api_key: get("OPENAI_API_KEY"),
            model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: get("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            temperature,
            timeout: Duration::from_secs(timeout_seconds),
            response_language: get("LLM_RESPONSE_LANGUAGE")
                .unwrap_or_else(|| DEFAULT_RESPONSE_LANGUAGE.to_string()),
        };
        llm.base_url()?;

        Ok(Self {
            environment: get("ENV").unwrap_or(defaults.environment),
            llm,
            paths: PathsConfig {
                data_dir,
                reports_dir,
                log_dir,
            },
            universe,
            decision_concurrency,
        })
    }

    pub fn is_production(&self) -> bool {
        is_production(&self.environment)
    }
}

pub fn is_production(environment: &str) -> bool {
    matches!(environment, "production" | "prod")
}
