//! Infrastructure layer: blob persistence, configuration, and the
//! write-through `InventoryStore`.

pub mod blob_store;
pub mod codec;
pub mod config;
pub mod inventory_store;


pub use blob_store::{BlobStore, BlobStoreError, FileBlobStore, InMemoryBlobStore};
pub use config::StorageConfig;
pub use inventory_store::InventoryStore;
