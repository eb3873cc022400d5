use std::{env, time::Duration};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_API_BASE: &str = "http://localhost:3002";
pub const DEFAULT_STATUS_API_BASE: &str = "https://attendance-api-vk9k.onrender.com";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Base URL for the mutating calls.
    pub api_base: String,
    /// Base URL for the read-only attendance listing.
    pub status_api_base: String,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let timeout_secs = env::var("ATTENDANCE_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            port,
            api_base: base_url(env::var("ATTENDANCE_API_BASE").ok(), DEFAULT_API_BASE),
            status_api_base: base_url(
                env::var("ATTENDANCE_STATUS_API_BASE").ok(),
                DEFAULT_STATUS_API_BASE,
            ),
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }
}

fn base_url(value: Option<String>, fallback: &str) -> String {
    let value = value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| fallback.to_string());
    value.trim_end_matches('/').to_string()
}
