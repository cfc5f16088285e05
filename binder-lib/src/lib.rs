//! Filter, aggregation, and session logic for the card binder.
//!
//! The pipeline is pure: [`pipeline::render`] takes a catalogue, a
//! [`FilterState`], and the owned card IDs and returns the grouped view with
//! its summary and progress. [`Session`] holds the per-user state that feeds
//! it and routes ownership changes through a store.

pub mod aggregate;
pub mod backend;
pub mod config;
pub mod entitlement;
pub mod error;
pub mod filter;
pub mod ownership;
pub mod pipeline;
pub mod session;

pub use aggregate::{Progress, Summary, parse_update_date, progress, summarize};
pub use backend::{Backend, BinderStore, open_store};
pub use config::{ConfigFile, Overrides, Settings, Source, config_path};
pub use entitlement::Entitlements;
pub use error::BinderError;
pub use filter::{
    Bounds, FilterOptions, FilterOutcome, FilterState, OwnershipMode, PokemonGroup, View, apply,
};
pub use ownership::OwnedCards;
pub use pipeline::{Render, render};
pub use session::Session;
