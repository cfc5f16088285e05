//! SQLite persistence for per-user ownership and plan records.
//!
//! Provides schema creation, write operations, read queries, and a
//! [`SqliteStore`] implementing the catalogue's store traits
//! (via rusqlite with bundled feature).

pub mod operations;
pub mod queries;
pub mod schema;
pub mod store;

pub use operations::{OperationError, add_owned_card, ensure_plan, remove_owned_card, set_plan};
pub use queries::{find_plan, owned_cards};
pub use schema::{SchemaError, open_database, open_memory};
pub use store::SqliteStore;
