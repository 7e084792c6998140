use std::collections::HashMap;
use std::sync::RwLock;

use super::{BlobStore, BlobStoreError};

/// In-memory blob store for tests/embedding.
#[derive(Debug, Default)]
pub struct InMemoryBlobStore {
    inner: RwLock<HashMap<String, String>>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate `key`, e.g. with a blob written by another producer.
    pub fn with_blob(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        if let Ok(mut map) = store.inner.write() {
            map.insert(key.into(), value.into());
        }
        store
    }
}

impl BlobStore for InMemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, BlobStoreError> {
        let map = self
            .inner
            .read()
            .map_err(|_| std::io::Error::other("blob store lock poisoned"))?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BlobStoreError> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| std::io::Error::other("blob store lock poisoned"))?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
