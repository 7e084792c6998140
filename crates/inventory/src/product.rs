use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, ProductId};

use crate::status::{StockStatus, derive_status};

/// Threshold used when a draft or stored record carries none (or a non-positive one).
pub const DEFAULT_LOW_STOCK_ALERT: u64 = 10;

/// The fixed category choices offered by the product form.
///
/// Category is still stored as free text; anything else is accepted.
pub const KNOWN_CATEGORIES: [&str; 4] = [
    "Electronics",
    "Home & Garden",
    "Sports & Outdoor",
    "Books & Media",
];

pub fn is_known_category(category: &str) -> bool {
    KNOWN_CATEGORIES.contains(&category)
}

/// Editable product fields, as used by add and update.
///
/// Everything except `id` and `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub quantity: u64,
    pub price: f64,
    pub low_stock_alert: u64,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity: 0,
            price: 0.0,
            low_stock_alert: DEFAULT_LOW_STOCK_ALERT,
        }
    }

    pub fn with_quantity(mut self, quantity: u64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_low_stock_alert(mut self, low_stock_alert: u64) -> Self {
        self.low_stock_alert = low_stock_alert;
        self
    }

    /// Validate and normalise into the values a `Product` stores.
    fn validated(self) -> DomainResult<Self> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("product name is required"));
        }

        Ok(Self {
            name: name.to_string(),
            category: self.category,
            quantity: self.quantity,
            price: normalize_price(self.price),
            low_stock_alert: normalize_low_stock_alert(self.low_stock_alert),
        })
    }
}

/// A single inventory line item.
///
/// Serialized field names match the persisted blob layout
/// (`id, name, category, quantity, price, lowStockAlert, createdAt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    name: String,
    category: String,
    #[serde(default, deserialize_with = "deserialize_quantity")]
    quantity: u64,
    #[serde(default, deserialize_with = "deserialize_price")]
    price: f64,
    #[serde(
        default = "default_low_stock_alert",
        deserialize_with = "deserialize_low_stock_alert"
    )]
    low_stock_alert: u64,
    created_at: DateTime<Utc>,
}

impl Product {
    /// Create a product from a draft.
    ///
    /// `id` and `created_at` are fixed here and never change afterwards.
    pub fn create(
        id: ProductId,
        draft: ProductDraft,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let draft = draft.validated()?;
        Ok(Self {
            id,
            name: draft.name,
            category: draft.category,
            quantity: draft.quantity,
            price: draft.price,
            low_stock_alert: draft.low_stock_alert,
            created_at,
        })
    }

    pub fn id_typed(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn low_stock_alert(&self) -> u64 {
        self.low_stock_alert
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Stock value of this line (`quantity × price`).
    pub fn value(&self) -> f64 {
        self.quantity as f64 * self.price
    }

    pub fn status(&self) -> StockStatus {
        derive_status(self.quantity, self.low_stock_alert)
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.quantity == 0
    }

    /// In stock but at or below the restock threshold.
    pub fn is_low_stock(&self) -> bool {
        self.quantity > 0 && self.quantity <= self.low_stock_alert
    }

    /// Above the restock threshold (medium or in stock).
    pub fn is_above_threshold(&self) -> bool {
        self.quantity > self.low_stock_alert
    }

    /// Replace every editable field. On validation failure nothing changes.
    pub fn apply_draft(&mut self, draft: ProductDraft) -> DomainResult<()> {
        let draft = draft.validated()?;
        self.name = draft.name;
        self.category = draft.category;
        self.quantity = draft.quantity;
        self.price = draft.price;
        self.low_stock_alert = draft.low_stock_alert;
        Ok(())
    }

    /// Shift the quantity by `delta`, clamping at zero. Returns the new quantity.
    pub fn adjust_quantity(&mut self, delta: i64) -> u64 {
        self.quantity = if delta < 0 {
            self.quantity.saturating_sub(delta.unsigned_abs())
        } else {
            self.quantity.saturating_add(delta.unsigned_abs())
        };
        self.quantity
    }

    /// Current editable fields, e.g. to pre-fill an edit form.
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            category: self.category.clone(),
            quantity: self.quantity,
            price: self.price,
            low_stock_alert: self.low_stock_alert,
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn normalize_price(price: f64) -> f64 {
    if price.is_finite() && price > 0.0 { price } else { 0.0 }
}

fn normalize_low_stock_alert(threshold: u64) -> u64 {
    if threshold == 0 {
        DEFAULT_LOW_STOCK_ALERT
    } else {
        threshold
    }
}

fn default_low_stock_alert() -> u64 {
    DEFAULT_LOW_STOCK_ALERT
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let price = Option::<f64>::deserialize(deserializer)?;
    Ok(price.map(normalize_price).unwrap_or(0.0))
}

/// Negative stored quantities clamp to zero.
fn deserialize_quantity<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let quantity = Option::<i64>::deserialize(deserializer)?;
    Ok(quantity.map(|q| q.max(0) as u64).unwrap_or(0))
}

/// Missing or non-positive stored thresholds become the default.
fn deserialize_low_stock_alert<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let threshold = Option::<i64>::deserialize(deserializer)?;
    Ok(match threshold {
        Some(t) if t > 0 => t as u64,
        _ => DEFAULT_LOW_STOCK_ALERT,
    })
}
