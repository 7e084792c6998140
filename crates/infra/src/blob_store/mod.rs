//! Opaque key/value persistence for the serialized product collection.

pub mod file;
pub mod memory;

use std::sync::Arc;

use thiserror::Error;

pub use file::FileBlobStore;
pub use memory::InMemoryBlobStore;

#[derive(Debug, Error)]
pub enum BlobStoreError {
    #[error("blob store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode or decode blob: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("invalid blob key: {0}")]
    InvalidKey(String),
}

/// Key/value store holding whole serialized blobs.
pub trait BlobStore: Send + Sync {
    /// `Ok(None)` when nothing has been stored under `key` yet.
    fn get(&self, key: &str) -> Result<Option<String>, BlobStoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), BlobStoreError>;
}

impl<S> BlobStore for Arc<S>
where
    S: BlobStore + ?Sized,
{
    fn get(&self, key: &str) -> Result<Option<String>, BlobStoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BlobStoreError> {
        (**self).set(key, value)
    }
}
