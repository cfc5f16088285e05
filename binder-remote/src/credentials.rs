use std::time::Duration;

use crate::error::RemoteError;

/// Default request-level timeout for remote calls.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection details for the remote table API.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Project base URL, e.g. `https://abc.example.co`. No trailing slash.
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl Credentials {
    /// Validate and normalize connection details.
    ///
    /// Both URL and key are required; the URL must be http(s).
    pub fn new(
        base_url: Option<String>,
        api_key: Option<String>,
        timeout_secs: Option<u64>,
    ) -> Result<Self, RemoteError> {
        let base_url = base_url
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .ok_or_else(|| {
                RemoteError::config(
                    "Missing remote url. Set BINDER_REMOTE_URL or [remote].url in the config file",
                )
            })?;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(RemoteError::config(format!(
                "Remote url must start with http:// or https:// (got '{base_url}')"
            )));
        }

        let api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                RemoteError::config(
                    "Missing remote api key. Set BINDER_REMOTE_KEY or [remote].api_key in the config file",
                )
            })?;

        Ok(Self {
            base_url,
            api_key,
            timeout: Duration::from_secs(timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        })
    }
}

/// Mask a secret for display, keeping only the first two characters.
pub fn mask_value(s: &str) -> String {
    if s.chars().count() <= 2 {
        "****".to_string()
    } else {
        let head: String = s.chars().take(2).collect();
        format!("{head}****")
    }
}
