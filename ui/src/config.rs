use std::env;
use std::time::Duration;

use crate::error::ClientError;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/v1";
pub const DEFAULT_PLACEHOLDER_ICON_URL: &str = "https://i.pravatar.cc/50";
const DEFAULT_STATUS_RESET_MS: u64 = 2000;
const DEFAULT_MODAL_CLOSE_MS: u64 = 1000;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the timeline API, without trailing slash
    pub api_url: String,
    /// How long like/repost statuses stay visible before the control resets
    pub status_reset_delay: Duration,
    /// Pause between a successful post/reply and closing its modal
    pub modal_close_delay: Duration,
    /// Optional client-side request timeout. `None` leaves it to the network layer.
    pub request_timeout: Option<Duration>,
    /// Avatar service used when a record carries no icon
    pub placeholder_icon_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            status_reset_delay: Duration::from_millis(DEFAULT_STATUS_RESET_MS),
            modal_close_delay: Duration::from_millis(DEFAULT_MODAL_CLOSE_MS),
            request_timeout: None,
            placeholder_icon_url: DEFAULT_PLACEHOLDER_ICON_URL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ClientError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("ALGIA_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self {
            api_url: normalize_base_url(&api_url)?,
            status_reset_delay: Duration::from_millis(millis_or(
                &lookup,
                "ALGIA_STATUS_RESET_MS",
                DEFAULT_STATUS_RESET_MS,
            )),
            modal_close_delay: Duration::from_millis(millis_or(
                &lookup,
                "ALGIA_MODAL_CLOSE_MS",
                DEFAULT_MODAL_CLOSE_MS,
            )),
            request_timeout: lookup("ALGIA_REQUEST_TIMEOUT_SECS")
                .and_then(|v| parse_u64("ALGIA_REQUEST_TIMEOUT_SECS", &v))
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
            placeholder_icon_url: lookup("ALGIA_PLACEHOLDER_ICON_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER_ICON_URL.to_string()),
        })
    }

    /// Replace the API URL (e.g. from a CLI flag)
    pub fn with_api_url(mut self, api_url: &str) -> Result<Self, ClientError> {
        self.api_url = normalize_base_url(api_url)?;
        Ok(self)
    }
}

fn millis_or<F>(lookup: &F, key: &str, default: u64) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|v| parse_u64(key, &v))
        .unwrap_or(default)
}

fn parse_u64(key: &str, value: &str) -> Option<u64> {
    match value.trim().parse() {
        Ok(n) => Some(n),
        Err(_) => {
            tracing::warn!("Ignoring {}={:?}: not a whole number", key, value);
            None
        }
    }
}

/// Strip trailing slashes and require an http(s) scheme.
pub fn normalize_base_url(url: &str) -> Result<String, ClientError> {
    let trimmed = url.trim().trim_end_matches('/');
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err(ClientError::Config(format!(
            "API URL must start with http:// or https://: {}",
            url
        )));
    }
    Ok(trimmed.to_string())
}
