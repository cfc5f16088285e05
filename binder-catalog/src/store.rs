//! Persistence contracts for per-user ownership and plan records.
//!
//! Implemented by `binder-db` (SQLite) and `binder-remote` (HTTP table API).
//! Every call is one blocking round-trip.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::types::{CardId, Plan};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Store rejected the request: {0}")]
    Rejected(String),

    #[error("Invalid data from store: {0}")]
    InvalidData(String),
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }

    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }
}

/// Ownership table keyed by `(user, card_id)`.
pub trait CollectionStore {
    /// All card IDs owned by `user`.
    fn load(&self, user: &str) -> Result<BTreeSet<CardId>, StoreError>;

    /// Record ownership. Upserts, so repeating it is harmless.
    fn add(&self, user: &str, card: &CardId) -> Result<(), StoreError>;

    /// Delete ownership by exact key. Removing an unowned card is not an error.
    fn remove(&self, user: &str, card: &CardId) -> Result<(), StoreError>;
}

/// Plan record keyed by user.
pub trait PlanStore {
    /// The user's plan. Creates a `basic` record on first access.
    fn plan(&self, user: &str) -> Result<Plan, StoreError>;

    fn set_plan(&self, user: &str, plan: Plan) -> Result<(), StoreError>;
}
