//! Inventory domain module.
//!
//! This crate contains the business rules for the product list (validation,
//! stock status tiers, filtering, sorting, aggregate statistics), implemented
//! purely as deterministic domain logic (no IO, no storage).

pub mod input;
pub mod product;
pub mod query;
pub mod samples;
pub mod stats;
pub mod status;

pub use input::RawProductInput;
pub use product::{
    DEFAULT_LOW_STOCK_ALERT, KNOWN_CATEGORIES, Product, ProductDraft, is_known_category,
};
pub use query::{EmptyState, FilterSpec, SortDirection, SortField, SortSpec, StatusFilter, query};
pub use samples::sample_catalog;
pub use stats::InventoryStats;
pub use status::{StockStatus, derive_status};
