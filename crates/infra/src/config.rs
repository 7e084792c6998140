//! Storage configuration, read from the environment.

use std::path::PathBuf;

/// Blob key the browser tracker used; kept so exported blobs drop straight in.
pub const DEFAULT_STORAGE_KEY: &str = "inventory";

pub const ENV_DATA_DIR: &str = "STOCKROOM_DATA_DIR";
pub const ENV_STORAGE_KEY: &str = "STOCKROOM_STORAGE_KEY";

/// Where and under which key the inventory blob lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub key: String,
}

impl StorageConfig {
    pub fn new(data_dir: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.into(),
            key: key.into(),
        }
    }

    /// Build from `STOCKROOM_DATA_DIR` / `STOCKROOM_STORAGE_KEY`, falling back
    /// to the OS data directory and the `inventory` key.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`StorageConfig::from_env`] with an injectable variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = match lookup(ENV_DATA_DIR).filter(|v| !v.trim().is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir(),
        };

        let key = match lookup(ENV_STORAGE_KEY) {
            Some(key) if !key.trim().is_empty() => key.trim().to_string(),
            Some(_) => {
                tracing::warn!(
                    "{ENV_STORAGE_KEY} is empty; using default key {DEFAULT_STORAGE_KEY:?}"
                );
                DEFAULT_STORAGE_KEY.to_string()
            }
            None => DEFAULT_STORAGE_KEY.to_string(),
        };

        Self { data_dir, key }
    }
}

/// `<os data dir>/stockroom`, or `./.stockroom` when no home can be resolved.
fn default_data_dir() -> PathBuf {
    let base = dirs::data_dir().or_else(|| {
        dirs::home_dir().map(|mut h| {
            h.push(".local");
            h.push("share");
            h
        })
    });

    match base {
        Some(mut dir) => {
            dir.push("stockroom");
            dir
        }
        None => {
            tracing::warn!("failed to resolve OS data directory; using ./.stockroom");
            PathBuf::from(".stockroom")
        }
    }
}
