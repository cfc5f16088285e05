use binder_catalog::{LoadError, Plan, StoreError};
use binder_db::SchemaError;
use binder_remote::RemoteError;
use thiserror::Error;

/// Errors surfaced by the binder pipeline and session operations.
#[derive(Debug, Error)]
pub enum BinderError {
    /// Ownership or plan store call failed; local state was left unchanged
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Collection editing is gated behind the pro plan
    #[error("Editing the collection requires the pro plan (current plan: {plan})")]
    FeatureLocked { plan: Plan },

    /// Card id not present in the catalogue
    #[error("Unknown card: {0}")]
    UnknownCard(String),

    #[error("Catalogue error: {0}")]
    Catalogue(#[from] LoadError),

    #[error("Database error: {0}")]
    Database(#[from] SchemaError),

    #[error("Remote store error: {0}")]
    Remote(#[from] RemoteError),

    #[error("Config error: {0}")]
    Config(String),
}

impl BinderError {
    pub fn unknown_card(id: impl Into<String>) -> Self {
        Self::UnknownCard(id.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
