use std::fmt;
use std::str::FromStr;

use binder_catalog::{CollectionStore, PlanStore};
use binder_db::SqliteStore;
use binder_remote::RemoteStore;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::BinderError;

/// A store that holds both ownership and plan records.
pub trait BinderStore: CollectionStore + PlanStore {}

impl<T: CollectionStore + PlanStore + ?Sized> BinderStore for T {}

/// Which persistence the session talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Sqlite,
    Remote,
}

impl Backend {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Remote => "remote",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "remote" => Ok(Self::Remote),
            other => Err(format!(
                "unknown backend '{other}' (expected sqlite or remote)"
            )),
        }
    }
}

/// Open the store selected by `settings.backend`.
pub fn open_store(settings: &Settings) -> Result<Box<dyn BinderStore>, BinderError> {
    match settings.backend.value {
        Backend::Sqlite => {
            let path = &settings.db_path.value;
            log::debug!("Opening SQLite store at {}", path.display());
            Ok(Box::new(SqliteStore::open(path)?))
        }
        Backend::Remote => {
            let creds = settings.remote_credentials()?;
            log::debug!("Using remote store at {}", creds.base_url);
            Ok(Box::new(RemoteStore::new(creds)?))
        }
    }
}
