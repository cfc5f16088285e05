//! [`CollectionStore`] and [`PlanStore`] over a SQLite connection.

use std::collections::BTreeSet;
use std::path::Path;

use binder_catalog::{CardId, CollectionStore, Plan, PlanStore, StoreError};
use rusqlite::Connection;

use crate::operations::{self, OperationError};
use crate::queries;
use crate::schema::{self, SchemaError};

/// Ownership and plan store backed by a local SQLite database.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self, SchemaError> {
        Ok(Self {
            conn: schema::open_database(path)?,
        })
    }

    pub fn open_memory() -> Result<Self, SchemaError> {
        Ok(Self {
            conn: schema::open_memory()?,
        })
    }
}

impl From<OperationError> for StoreError {
    fn from(e: OperationError) -> Self {
        match e {
            OperationError::InvalidValue { .. } => StoreError::invalid_data(e.to_string()),
            OperationError::Sqlite(e) => StoreError::unavailable(e.to_string()),
        }
    }
}

impl CollectionStore for SqliteStore {
    fn load(&self, user: &str) -> Result<BTreeSet<CardId>, StoreError> {
        Ok(queries::owned_cards(&self.conn, user)?)
    }

    fn add(&self, user: &str, card: &CardId) -> Result<(), StoreError> {
        Ok(operations::add_owned_card(&self.conn, user, card)?)
    }

    fn remove(&self, user: &str, card: &CardId) -> Result<(), StoreError> {
        operations::remove_owned_card(&self.conn, user, card)?;
        Ok(())
    }
}

impl PlanStore for SqliteStore {
    fn plan(&self, user: &str) -> Result<Plan, StoreError> {
        if let Some(plan) = queries::find_plan(&self.conn, user)? {
            return Ok(plan);
        }
        operations::ensure_plan(&self.conn, user)?;
        log::debug!("Created basic plan record for '{user}'");
        Ok(Plan::Basic)
    }

    fn set_plan(&self, user: &str, plan: Plan) -> Result<(), StoreError> {
        Ok(operations::set_plan(&self.conn, user, plan)?)
    }
}
