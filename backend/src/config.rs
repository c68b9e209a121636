//! Runtime configuration read from environment variables.

use crate::error::AppError;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_DIR: &str = "datos";
const DEFAULT_TEMPLATES_DIR: &str = "plantillas";
const DEFAULT_OUTPUT_DIR: &str = "salidas";
const DEFAULT_DISTRICT: &str = "PACHACAMAC";
const DEFAULT_CODART_BASE_URL: &str = "https://api.codart.cgrt.net/api/v1/consultas";
const DEFAULT_CODART_TIMEOUT_SECS: u64 = 25;
const DEFAULT_CODART_CACHE_TTL_SECS: u64 = 24 * 60 * 60;
const DEFAULT_SESSION_IDLE_SECS: u64 = 12 * 60 * 60;

#[derive(Debug, Clone)]
pub struct LookupConfig {
    pub base_url: String,
    /// Only needed once a lookup actually runs.
    pub token: Option<String>,
    pub timeout: Duration,
    pub cache_ttl: Duration,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Appended to the applicant's address in resolutions.
    pub district: String,
    /// Sessions unused for this long are dropped.
    pub session_idle: Duration,
    pub lookup: LookupConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source. Blank values count
    /// as unset.
    pub fn from_source(source: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let get = |key: &str| {
            source(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };
        let text = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_owned());

        let port = match get("TRAMITES_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::Config(format!("TRAMITES_PORT debe ser un puerto válido, no '{raw}'"))
            })?,
            None => DEFAULT_PORT,
        };
        let timeout = seconds(get("CODART_TIMEOUT_SECS"), "CODART_TIMEOUT_SECS", DEFAULT_CODART_TIMEOUT_SECS)?;
        let cache_ttl = seconds(
            get("CODART_CACHE_TTL_SECS"),
            "CODART_CACHE_TTL_SECS",
            DEFAULT_CODART_CACHE_TTL_SECS,
        )?;
        let session_idle = seconds(
            get("TRAMITES_SESSION_IDLE_SECS"),
            "TRAMITES_SESSION_IDLE_SECS",
            DEFAULT_SESSION_IDLE_SECS,
        )?;

        Ok(Self {
            host: text("TRAMITES_HOST", DEFAULT_HOST),
            port,
            data_dir: PathBuf::from(text("TRAMITES_DATA_DIR", DEFAULT_DATA_DIR)),
            templates_dir: PathBuf::from(text("TRAMITES_TEMPLATES_DIR", DEFAULT_TEMPLATES_DIR)),
            output_dir: PathBuf::from(text("TRAMITES_OUTPUT_DIR", DEFAULT_OUTPUT_DIR)),
            district: text("TRAMITES_DISTRICT", DEFAULT_DISTRICT),
            session_idle,
            lookup: LookupConfig {
                base_url: text("CODART_BASE_URL", DEFAULT_CODART_BASE_URL)
                    .trim_end_matches('/')
                    .to_owned(),
                token: get("CODART_TOKEN"),
                timeout,
                cache_ttl,
            },
        })
    }
}

fn seconds(raw: Option<String>, key: &str, default: u64) -> Result<Duration, AppError> {
    match raw {
        Some(raw) => raw
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| AppError::Config(format!("{key} debe ser un número de segundos, no '{raw}'"))),
        None => Ok(Duration::from_secs(default)),
    }
}
