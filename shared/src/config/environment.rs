//! Environment configuration module

use serde::{Deserialize, Serialize};

use super::env_var;
use crate::errors::{ConfigError, ConfigResult};

/// Deployment environment, selected by `ENVIRONMENT`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }

    pub fn is_development(self) -> bool {
        self == Environment::Development
    }

    /// Read `ENVIRONMENT`; unset or unrecognised values mean development
    pub fn from_env() -> Self {
        env_var("ENVIRONMENT")
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    /// Environment-specific dotenv file, e.g. `.env.staging`
    pub fn env_file(self) -> String {
        format!(".env.{}", self.as_str())
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let env = match s.trim().to_lowercase().as_str() {
            "development" | "dev" | "local" => Environment::Development,
            "staging" | "stage" => Environment::Staging,
            "production" | "prod" => Environment::Production,
            other => return Err(format!("unknown environment '{}'", other)),
        };
        Ok(env)
    }
}

/// Subscriber settings consumed by `le_infra::telemetry`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Level or full filter directive (e.g. `info,le_core=debug`)
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,

    /// Emit file and line for each event
    #[serde(default)]
    pub source_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::for_environment(Environment::Staging)
    }
}

impl LoggingConfig {
    /// Verbose pretty output in development, JSON elsewhere
    pub fn for_environment(env: Environment) -> Self {
        let (level, format) = match env {
            Environment::Development => ("debug", LogFormat::Pretty),
            Environment::Staging => ("info", LogFormat::Json),
            Environment::Production => ("warn", LogFormat::Json),
        };
        Self {
            level: level.to_string(),
            format,
            source_location: env.is_development(),
        }
    }

    /// Environment defaults, overridden by `LOG_LEVEL` and `LOG_FORMAT`
    pub fn from_env(env: Environment) -> ConfigResult<Self> {
        let mut config = Self::for_environment(env);
        if let Some(level) = env_var("LOG_LEVEL") {
            config.level = level;
        }
        if let Some(raw) = env_var("LOG_FORMAT") {
            config.format = raw.parse().map_err(|_| ConfigError::Invalid {
                var: "LOG_FORMAT".to_string(),
                value: raw,
            })?;
        }
        Ok(config)
    }
}

/// Output format of the fmt layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
    Compact,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format = match s.trim().to_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            "compact" => LogFormat::Compact,
            other => return Err(format!("unknown log format '{}'", other)),
        };
        Ok(format)
    }
}
