//! Application settings shared by every frontend.
//!
//! Each value is resolved through a priority chain:
//!
//! 1. Command-line flag
//! 2. Environment variable (`BINDER_*`)
//! 3. `~/.config/poke-binder/config.toml`
//! 4. Built-in default
//!
//! The source of every value is kept so `config show` can explain it.

use std::fmt;
use std::path::{Path, PathBuf};

use binder_remote::{Credentials, DEFAULT_TIMEOUT_SECS, mask_value};
use serde::{Deserialize, Serialize};

use crate::backend::Backend;
use crate::error::BinderError;

pub const ENV_CATALOGUE: &str = "BINDER_CATALOGUE";
pub const ENV_USER: &str = "BINDER_USER";
pub const ENV_BACKEND: &str = "BINDER_BACKEND";
pub const ENV_DB: &str = "BINDER_DB";
pub const ENV_REMOTE_URL: &str = "BINDER_REMOTE_URL";
pub const ENV_REMOTE_KEY: &str = "BINDER_REMOTE_KEY";

pub const DEFAULT_CATALOGUE: &str = "overview_cards.csv";
pub const DEFAULT_USER: &str = "default";

/// Canonical path to the config file: `~/.config/poke-binder/config.toml`.
pub fn config_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("poke-binder").join("config.toml")
}

/// Default SQLite location: `~/.local/share/poke-binder/binder.db` on Linux.
pub fn default_db_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("poke-binder").join("binder.db")
}

/// Where a setting's value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Flag,
    Env(&'static str),
    ConfigFile,
    Default,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag => f.write_str("flag"),
            Self::Env(var) => write!(f, "env {var}"),
            Self::ConfigFile => f.write_str("config file"),
            Self::Default => f.write_str("default"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Setting<T> {
    pub value: T,
    pub source: Source,
}

impl<T> Setting<T> {
    fn new(value: T, source: Source) -> Self {
        Self { value, source }
    }
}

/// On-disk layout of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub catalogue: Option<PathBuf>,
    pub user: Option<String>,
    pub backend: Option<Backend>,
    pub db_path: Option<PathBuf>,
    pub remote: RemoteSection,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RemoteSection {
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ConfigFile {
    pub fn parse(contents: &str) -> Result<Self, BinderError> {
        toml::from_str(contents).map_err(|e| BinderError::config(e.to_string()))
    }

    /// Read the config file. A missing file is an empty config.
    pub fn read(path: &Path) -> Result<Self, BinderError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(BinderError::config(format!(
                    "Cannot read {}: {e}",
                    path.display()
                )));
            }
        };
        toml::from_str(&contents)
            .map_err(|e| BinderError::config(format!("{}: {e}", path.display())))
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub catalogue: Option<PathBuf>,
    pub user: Option<String>,
    pub backend: Option<Backend>,
    pub db_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub catalogue: Setting<PathBuf>,
    pub user: Setting<String>,
    pub backend: Setting<Backend>,
    pub db_path: Setting<PathBuf>,
    pub remote_url: Option<Setting<String>>,
    pub remote_api_key: Option<Setting<String>>,
    pub remote_timeout_secs: Setting<u64>,
}

impl Settings {
    /// Resolve settings from flags, the process environment, and the
    /// config file at [`config_path`].
    pub fn load(overrides: Overrides) -> Result<Self, BinderError> {
        let path = config_path();
        let file = ConfigFile::read(&path)?;
        log::debug!("Config file: {}", path.display());
        Self::resolve(overrides, file, |var| std::env::var(var).ok())
    }

    /// Resolve settings from explicit sources.
    pub fn resolve(
        overrides: Overrides,
        file: ConfigFile,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, BinderError> {
        let env_value = |var: &'static str| {
            env(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(|v| (var, v))
        };

        let catalogue = pick(
            overrides.catalogue,
            env_value(ENV_CATALOGUE).map(|(var, v)| (var, PathBuf::from(v))),
            file.catalogue,
        )
        .unwrap_or_else(|| Setting::new(PathBuf::from(DEFAULT_CATALOGUE), Source::Default));

        let user = pick(overrides.user, env_value(ENV_USER), file.user)
            .unwrap_or_else(|| Setting::new(DEFAULT_USER.to_string(), Source::Default));

        let env_backend = match env_value(ENV_BACKEND) {
            Some((var, v)) => Some((var, v.parse::<Backend>().map_err(BinderError::config)?)),
            None => None,
        };
        let backend = pick(overrides.backend, env_backend, file.backend)
            .unwrap_or_else(|| Setting::new(Backend::default(), Source::Default));

        let db_path = pick(
            overrides.db_path,
            env_value(ENV_DB).map(|(var, v)| (var, PathBuf::from(v))),
            file.db_path,
        )
        .unwrap_or_else(|| Setting::new(default_db_path(), Source::Default));

        let remote_url = pick(None, env_value(ENV_REMOTE_URL), file.remote.url);
        let remote_api_key = pick(None, env_value(ENV_REMOTE_KEY), file.remote.api_key);
        let remote_timeout_secs = match file.remote.timeout_secs {
            Some(secs) => Setting::new(secs, Source::ConfigFile),
            None => Setting::new(DEFAULT_TIMEOUT_SECS, Source::Default),
        };

        Ok(Self {
            catalogue,
            user,
            backend,
            db_path,
            remote_url,
            remote_api_key,
            remote_timeout_secs,
        })
    }

    /// Connection details for the remote backend.
    pub fn remote_credentials(&self) -> Result<Credentials, BinderError> {
        Ok(Credentials::new(
            self.remote_url.as_ref().map(|s| s.value.clone()),
            self.remote_api_key.as_ref().map(|s| s.value.clone()),
            Some(self.remote_timeout_secs.value),
        )?)
    }

    /// `(key, value, source)` rows for display. The API key is masked.
    pub fn display_rows(&self) -> Vec<(&'static str, String, Option<Source>)> {
        vec![
            (
                "catalogue",
                self.catalogue.value.display().to_string(),
                Some(self.catalogue.source),
            ),
            ("user", self.user.value.clone(), Some(self.user.source)),
            (
                "backend",
                self.backend.value.to_string(),
                Some(self.backend.source),
            ),
            (
                "db_path",
                self.db_path.value.display().to_string(),
                Some(self.db_path.source),
            ),
            (
                "remote.url",
                self.remote_url
                    .as_ref()
                    .map(|s| s.value.clone())
                    .unwrap_or_default(),
                self.remote_url.as_ref().map(|s| s.source),
            ),
            (
                "remote.api_key",
                self.remote_api_key
                    .as_ref()
                    .map(|s| mask_value(&s.value))
                    .unwrap_or_default(),
                self.remote_api_key.as_ref().map(|s| s.source),
            ),
            (
                "remote.timeout_secs",
                self.remote_timeout_secs.value.to_string(),
                Some(self.remote_timeout_secs.source),
            ),
        ]
    }
}

/// First present value by priority: flag, environment, config file.
fn pick<T>(
    flag: Option<T>,
    env: Option<(&'static str, T)>,
    file: Option<T>,
) -> Option<Setting<T>> {
    if let Some(v) = flag {
        return Some(Setting::new(v, Source::Flag));
    }
    if let Some((var, v)) = env {
        return Some(Setting::new(v, Source::Env(var)));
    }
    file.map(|v| Setting::new(v, Source::ConfigFile))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
