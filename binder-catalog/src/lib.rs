//! Card catalogue data model, CSV loading, and store contracts.
//!
//! This crate defines the card table and its identifiers without any
//! persistence dependencies. `binder-db` and `binder-remote` implement the
//! store traits; `binder-lib` runs the filter and aggregation pipeline.

pub mod images;
pub mod loader;
pub mod placeholder;
pub mod store;
pub mod types;

pub use images::{CardImage, PLACEHOLDER_DATA_URI, resolve_image};
pub use loader::{
    Catalogue, CatalogueSource, LoadError, LoadReport, Loaded, RejectedRow, load_catalogue,
    load_catalogue_from_reader, load_or_placeholder,
};
pub use placeholder::placeholder_catalogue;
pub use store::{CollectionStore, PlanStore, StoreError};
pub use types::*;
