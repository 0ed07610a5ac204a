use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_PDF_WORKER_URL: &str = "http://localhost:4000";
const DEFAULT_PDF_WORKER_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_BACKGROUND_URL: &str = "/backgrounds/ondas.png";

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub pdf_worker_url: String,
    pub pdf_worker_timeout: Duration,
    /// Background used when a theme leaves `backgroundImage` unset.
    pub default_background_url: String,
    /// Emitted as `<base href>` so root-relative assets resolve inside the PDF worker.
    pub asset_base_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", DEFAULT_PORT)
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            pdf_worker_url: env_or("PDF_WORKER_URL", DEFAULT_PDF_WORKER_URL),
            pdf_worker_timeout: Duration::from_secs(
                parse_env("PDF_WORKER_TIMEOUT_SECS", DEFAULT_PDF_WORKER_TIMEOUT_SECS)
                    .context("PDF_WORKER_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            default_background_url: env_or("DEFAULT_BACKGROUND_URL", DEFAULT_BACKGROUND_URL),
            asset_base_url: std::env::var("ASSET_BASE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            pdf_worker_url: DEFAULT_PDF_WORKER_URL.to_string(),
            pdf_worker_timeout: Duration::from_secs(DEFAULT_PDF_WORKER_TIMEOUT_SECS),
            default_background_url: DEFAULT_BACKGROUND_URL.to_string(),
            asset_base_url: None,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value '{raw}' for environment variable '{key}'")),
        Err(_) => Ok(default),
    }
}
