use std::env;

/// Default backend endpoint (the development server).
const DEFAULT_BASE_URL: &str = "http://localhost:9087";

/// Default request timeout in seconds. Image analysis can take a while
/// on a cold model, so this is generous.
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL, without a trailing slash.
    pub base_url: String,
    pub timeout_secs: u64,
    /// Strip literal double quotes from plain checklist segments, as the
    /// original front-end did. PLANT_DOCTOR_KEEP_QUOTES disables it.
    pub strip_quotes: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidTimeout(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidTimeout(v) => write!(
                f,
                "PLANT_DOCTOR_TIMEOUT_SECS must be a positive integer, got {:?}",
                v
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

fn is_truthy(v: &str) -> bool {
    matches!(v.trim(), "1" | "true" | "yes" | "on")
}

/// Load configuration from environment. Everything has a default; only a
/// malformed timeout is an error.
pub fn load() -> Result<Config, ConfigError> {
    let base_url = env::var("PLANT_DOCTOR_URL")
        .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
        .trim_end_matches('/')
        .to_string();

    let timeout_secs = match env::var("PLANT_DOCTOR_TIMEOUT_SECS") {
        Ok(v) => v
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|t| *t > 0)
            .ok_or(ConfigError::InvalidTimeout(v))?,
        Err(_) => DEFAULT_TIMEOUT_SECS,
    };

    let strip_quotes = !env::var("PLANT_DOCTOR_KEEP_QUOTES")
        .map(|v| is_truthy(&v))
        .unwrap_or(false);

    Ok(Config {
        base_url,
        timeout_secs,
        strip_quotes,
    })
}
