use binder_lib::BinderError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Pipeline, store, or settings failure
    #[error("{0}")]
    Binder(#[from] BinderError),

    /// Invalid command-line input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Logger setup failed
    #[error("Logging error: {0}")]
    Logging(String),
}

impl CliError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }

    /// Follow-up suggestion printed after the error, if any.
    pub(crate) fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Binder(BinderError::FeatureLocked { .. }) => {
                Some("Upgrade with 'poke-binder plan set pro' to edit your collection.")
            }
            Self::Binder(BinderError::Remote(_)) => {
                Some("Check 'poke-binder config show' for the remote url and api key.")
            }
            _ => None,
        }
    }
}
