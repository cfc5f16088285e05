//! Write operations for ownership and plan records.

use binder_catalog::{CardId, Plan};
use rusqlite::{Connection, params};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Invalid stored value for {field}: '{value}'")]
    InvalidValue { field: String, value: String },
}

// ── Collection Operations ───────────────────────────────────────────────────

/// Mark a card as owned. Upserts on `(user_id, card_id)`.
pub fn add_owned_card(conn: &Connection, user_id: &str, card: &CardId) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO collection (user_id, card_id) VALUES (?1, ?2)
         ON CONFLICT(user_id, card_id) DO UPDATE SET added_at = datetime('now')",
        params![user_id, card.as_str()],
    )?;
    Ok(())
}

/// Remove a card from a user's collection. Returns whether a row was deleted.
pub fn remove_owned_card(
    conn: &Connection,
    user_id: &str,
    card: &CardId,
) -> Result<bool, OperationError> {
    let changed = conn.execute(
        "DELETE FROM collection WHERE user_id = ?1 AND card_id = ?2",
        params![user_id, card.as_str()],
    )?;
    Ok(changed > 0)
}

// ── Plan Operations ─────────────────────────────────────────────────────────

/// Create a `basic` plan record if the user has none.
pub fn ensure_plan(conn: &Connection, user_id: &str) -> Result<(), OperationError> {
    conn.execute(
        "INSERT OR IGNORE INTO plans (user_id, plan) VALUES (?1, ?2)",
        params![user_id, Plan::Basic.as_str()],
    )?;
    Ok(())
}

/// Insert or update a user's plan.
pub fn set_plan(conn: &Connection, user_id: &str, plan: Plan) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO plans (user_id, plan) VALUES (?1, ?2)
         ON CONFLICT(user_id) DO UPDATE SET
             plan = excluded.plan,
             updated_at = datetime('now')",
        params![user_id, plan.as_str()],
    )?;
    Ok(())
}
