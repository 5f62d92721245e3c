use std::env;
use std::fmt;
use std::time::Duration;

/// Distinguishes runtime behavior for different stages of the service.
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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub evaluation: EvaluationSettings,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let cache_capacity = env::var("APP_CACHE_CAPACITY")
            .unwrap_or_else(|_| "256".to_string())
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidCacheCapacity)?;
        let cache_ttl_secs = env::var("APP_CACHE_TTL_SECS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidCacheTtl)?;
        let max_concurrent_extractions = env::var("APP_MAX_CONCURRENT_EXTRACTIONS")
            .unwrap_or_else(|_| "4".to_string())
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidConcurrency)?;

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            evaluation: EvaluationSettings {
                cache_capacity,
                cache_ttl_secs,
                max_concurrent_extractions,
            },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Knobs for the batch evaluation pipeline.
#[derive(Debug, Clone)]
pub struct EvaluationSettings {
    pub cache_capacity: usize,
    pub cache_ttl_secs: u64,
    pub max_concurrent_extractions: usize,
}

impl EvaluationSettings {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidCacheCapacity,
    InvalidCacheTtl,
    InvalidConcurrency,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidCacheCapacity => {
                write!(f, "APP_CACHE_CAPACITY must be a non-negative integer")
            }
            ConfigError::InvalidCacheTtl => {
                write!(f, "APP_CACHE_TTL_SECS must be a non-negative integer")
            }
            ConfigError::InvalidConcurrency => {
                write!(f, "APP_MAX_CONCURRENT_EXTRACTIONS must be a non-negative integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
