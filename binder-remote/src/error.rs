use binder_catalog::StoreError;

/// Errors that can occur talking to the remote table API.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Request rejected (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Server error (HTTP {status}): {message}")]
    ServerError { status: u16, message: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl RemoteError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<RemoteError> for StoreError {
    fn from(e: RemoteError) -> Self {
        match e {
            RemoteError::Timeout(_) => StoreError::timeout(e.to_string()),
            RemoteError::InvalidCredentials(_) | RemoteError::Rejected { .. } => {
                StoreError::rejected(e.to_string())
            }
            RemoteError::Json(_) => StoreError::invalid_data(e.to_string()),
            RemoteError::Http(_) | RemoteError::ServerError { .. } | RemoteError::Config(_) => {
                StoreError::unavailable(e.to_string())
            }
        }
    }
}
