//! Read queries for the binder database.

use std::collections::BTreeSet;

use binder_catalog::{CardId, Plan};
use rusqlite::{Connection, params};

use crate::operations::OperationError;

// ── Collection Queries ──────────────────────────────────────────────────────

/// All card IDs owned by a user.
pub fn owned_cards(conn: &Connection, user_id: &str) -> Result<BTreeSet<CardId>, OperationError> {
    let mut stmt = conn.prepare("SELECT card_id FROM collection WHERE user_id = ?1")?;
    let rows = stmt.query_map(params![user_id], |row| row.get::<_, String>(0))?;
    rows.map(|r| r.map(CardId::from))
        .collect::<Result<BTreeSet<_>, _>>()
        .map_err(Into::into)
}

// ── Plan Queries ────────────────────────────────────────────────────────────

/// A user's stored plan, or `None` if no record exists.
pub fn find_plan(conn: &Connection, user_id: &str) -> Result<Option<Plan>, OperationError> {
    let mut stmt = conn.prepare("SELECT plan FROM plans WHERE user_id = ?1 LIMIT 1")?;
    let result = stmt.query_row(params![user_id], |row| row.get::<_, String>(0));
    match result {
        Ok(value) => value
            .parse()
            .map(Some)
            .map_err(|_| OperationError::InvalidValue {
                field: "plans.plan".to_string(),
                value,
            }),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
