//! Remote ownership and plan store over a PostgREST-style HTTP table API.
//!
//! Every store call is a single blocking request with a request-level
//! timeout. Conflicting writes resolve by primary-key upsert on the server.

pub mod client;
pub mod credentials;
pub mod error;

pub use client::RemoteStore;
pub use credentials::{Credentials, DEFAULT_TIMEOUT_SECS, mask_value};
pub use error::RemoteError;
