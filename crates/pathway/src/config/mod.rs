use std::env;
use std::fmt;
use std::num::ParseIntError;

use crate::assessment::defense::LegalPolicy;

/// Distinguishes runtime behavior for different stages of deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the assessment tools.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub legal: LegalPolicy,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let mut legal = LegalPolicy::default();
        if let Some(threshold) = optional_number::<u32>(EXCESSIVE_DEMAND_VAR)? {
            legal = legal.with_excessive_demand_threshold(threshold);
        }
        if let Some(years) = optional_number::<u8>(SERIOUS_SENTENCE_VAR)? {
            legal = legal.with_serious_sentence_years(years);
        }

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            legal,
        })
    }
}

const EXCESSIVE_DEMAND_VAR: &str = "PATHWAY_EXCESSIVE_DEMAND_THRESHOLD";
const SERIOUS_SENTENCE_VAR: &str = "PATHWAY_SERIOUS_SENTENCE_YEARS";

fn optional_number<T>(var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    match env::var(var) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|source| ConfigError::InvalidNumber { var, source }),
        Err(_) => Ok(None),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber {
        var: &'static str,
        source: ParseIntError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { var, .. } => {
                write!(f, "{var} must be a non-negative whole number")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidNumber { source, .. } => Some(source),
        }
    }
}
