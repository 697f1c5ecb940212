use std::env;
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "Problems we tackle, Shift Offers v3.xlsx";
pub const DEFAULT_OUTPUT_DIR: &str = "report_output";

/// Distinguishes runtime behavior for different stages of the job.
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

/// Top-level configuration for the report job.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub report: ReportConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let data_file = path_var("OFFERS_DATA_FILE", DEFAULT_DATA_FILE)?;
        let output_dir = path_var("OFFERS_OUTPUT_DIR", DEFAULT_OUTPUT_DIR)?;
        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            report: ReportConfig {
                data_file,
                output_dir,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn path_var(name: &'static str, default: &str) -> Result<PathBuf, ConfigError> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::EmptyPath { var: name }),
        Ok(value) => Ok(PathBuf::from(value)),
        Err(_) => Ok(PathBuf::from(default)),
    }
}

/// Input and output locations of one report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub data_file: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyPath { var: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyPath { var } => write!(f, "{var} must not be empty when set"),
        }
    }
}

impl std::error::Error for ConfigError {}
