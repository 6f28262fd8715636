//! Session configuration and environment loading.
//!
//! ```rust
//! use std::time::Duration;
//!
//! use arix::ArixConfig;
//!
//! let config = ArixConfig::new("AIza-example")
//!     .with_model("gemini-2.5-flash")
//!     .with_timeout(Duration::from_secs(30));
//!
//! assert_eq!(config.model, "gemini-2.5-flash");
//! assert!(!format!("{config:?}").contains("AIza-example"));
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

use achat::DEFAULT_CONTEXT_LABEL;
use aprovider::SecretString;

pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_MODEL: &str = "ARIX_MODEL";
pub const ENV_BASE_URL: &str = "ARIX_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "ARIX_TIMEOUT_SECS";

pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    Missing,
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub kind: ConfigErrorKind,
    pub message: String,
}

impl ConfigError {
    pub fn new(kind: ConfigErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn missing(message: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::Missing, message)
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::Invalid, message)
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct ArixConfig {
    pub api_key: SecretString,
    pub model: String,
    /// Overrides the Gemini endpoint root; `None` uses the public API.
    pub base_url: Option<String>,
    /// HTTP request timeout; `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
    pub context_label: String,
}

impl ArixConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key),
            model: DEFAULT_MODEL.to_string(),
            base_url: None,
            timeout: None,
            context_label: DEFAULT_CONTEXT_LABEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_context_label(mut self, label: impl Into<String>) -> Self {
        self.context_label = label.into();
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_env_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_key = read(ENV_API_KEY)
            .ok_or_else(|| ConfigError::missing(format!("{ENV_API_KEY} is not set")))?;
        let mut config = Self::new(api_key);

        if let Some(model) = read(ENV_MODEL) {
            config.model = model;
        }

        config.base_url = read(ENV_BASE_URL);

        if let Some(raw) = read(ENV_TIMEOUT_SECS) {
            config.timeout = Some(parse_timeout_secs(&raw)?);
        }

        Ok(config)
    }
}

fn parse_timeout_secs(raw: &str) -> Result<Duration, ConfigError> {
    match raw.parse::<u64>() {
        Ok(0) => Err(ConfigError::invalid(format!(
            "{ENV_TIMEOUT_SECS} must be greater than zero"
        ))),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(err) => Err(ConfigError::invalid(format!(
            "{ENV_TIMEOUT_SECS} must be a whole number of seconds: {err}"
        ))),
    }
}
