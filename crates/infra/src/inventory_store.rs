//! Write-through inventory store.
//!
//! Owns the in-memory product list and flushes the whole collection to a
//! [`BlobStore`] after every successful mutation. Persistence failures never
//! reach the caller: a failed read yields an empty inventory, a failed write
//! is logged and the in-memory state stays authoritative.

use chrono::Utc;

use stockroom_core::{DomainError, DomainResult, Entity, ProductId, position_of};
use stockroom_inventory::{
    EmptyState, FilterSpec, InventoryStats, Product, ProductDraft, SortSpec, StockStatus,
    sample_catalog,
};

use crate::blob_store::BlobStore;
use crate::codec;
use crate::config::DEFAULT_STORAGE_KEY;

#[derive(Debug)]
pub struct InventoryStore<B>
where
    B: BlobStore,
{
    blobs: B,
    key: String,
    products: Vec<Product>,
}

impl<B> InventoryStore<B>
where
    B: BlobStore,
{
    /// Load the collection stored under the default key.
    pub fn open(blobs: B) -> Self {
        Self::load(blobs, DEFAULT_STORAGE_KEY)
    }

    /// Load the collection stored under `key`.
    ///
    /// Absent, unreadable or unparsable blobs all yield an empty inventory.
    pub fn load(blobs: B, key: impl Into<String>) -> Self {
        let key = key.into();

        let products = match blobs.get(&key) {
            Ok(Some(blob)) => match codec::decode(&blob) {
                Ok(products) => products,
                Err(err) => {
                    tracing::warn!(%key, "stored inventory is unparsable; starting empty: {err}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(%key, "failed to read stored inventory; starting empty: {err}");
                Vec::new()
            }
        };

        tracing::info!(%key, count = products.len(), "inventory loaded");

        Self {
            blobs,
            key,
            products,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn blob_store(&self) -> &B {
        &self.blobs
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Add a new product with a fresh id and creation timestamp.
    pub fn add(&mut self, draft: ProductDraft) -> DomainResult<&Product> {
        let product = Product::create(ProductId::generate(), draft, Utc::now())?;
        tracing::debug!(product_id = %product.id(), name = product.name(), "product added");

        self.products.push(product);
        self.persist();

        let last = self.products.len() - 1;
        Ok(&self.products[last])
    }

    /// Replace every field of `id` except its id and creation time.
    pub fn update(&mut self, id: &ProductId, draft: ProductDraft) -> DomainResult<&Product> {
        let idx = self.index_of(id)?;
        self.products[idx].apply_draft(draft)?;
        tracing::debug!(product_id = %id, "product updated");

        self.persist();
        Ok(&self.products[idx])
    }

    /// Shift the quantity of `id` by `delta`, clamped at zero. Returns the new quantity.
    pub fn adjust_quantity(&mut self, id: &ProductId, delta: i64) -> DomainResult<u64> {
        let idx = self.index_of(id)?;
        let quantity = self.products[idx].adjust_quantity(delta);
        tracing::debug!(product_id = %id, delta, quantity, "quantity adjusted");

        self.persist();
        Ok(quantity)
    }

    pub fn increment(&mut self, id: &ProductId) -> DomainResult<u64> {
        self.adjust_quantity(id, 1)
    }

    pub fn decrement(&mut self, id: &ProductId) -> DomainResult<u64> {
        self.adjust_quantity(id, -1)
    }

    /// Delete `id`. Confirmation is the caller's job.
    pub fn remove(&mut self, id: &ProductId) -> DomainResult<Product> {
        let idx = self.index_of(id)?;
        let removed = self.products.remove(idx);
        tracing::debug!(product_id = %id, "product removed");

        self.persist();
        Ok(removed)
    }

    pub fn derive_status(&self, product: &Product) -> StockStatus {
        product.status()
    }

    /// Filtered and sorted view over the current products.
    pub fn query(&self, filter: &FilterSpec, sort: &SortSpec) -> Vec<&Product> {
        stockroom_inventory::query(&self.products, filter, sort)
    }

    /// Why `view` is empty, if it is.
    pub fn empty_state(&self, view: &[&Product]) -> Option<EmptyState> {
        EmptyState::classify(self.products.len(), view.len())
    }

    pub fn stats(&self) -> InventoryStats {
        InventoryStats::from_products(&self.products)
    }

    /// Populate an empty inventory with the demo catalog.
    ///
    /// Returns how many products were inserted; 0 if the inventory already
    /// had products.
    pub fn seed_samples(&mut self) -> usize {
        if !self.products.is_empty() {
            return 0;
        }

        let now = Utc::now();
        for draft in sample_catalog() {
            match Product::create(ProductId::generate(), draft, now) {
                Ok(product) => self.products.push(product),
                Err(err) => tracing::warn!("skipping invalid sample product: {err}"),
            }
        }

        tracing::info!(count = self.products.len(), "seeded sample inventory");
        self.persist();
        self.products.len()
    }

    fn index_of(&self, id: &ProductId) -> DomainResult<usize> {
        position_of(&self.products, id).ok_or_else(|| DomainError::not_found(id))
    }

    fn persist(&self) {
        let result = codec::encode(&self.products).and_then(|blob| self.blobs.set(&self.key, &blob));
        if let Err(err) = result {
            tracing::error!(key = %self.key, "failed to persist inventory: {err}");
        }
    }
}
