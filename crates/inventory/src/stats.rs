//! Aggregate statistics over the whole inventory.

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Dashboard counters. Always computed over the unfiltered collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    pub total_items: usize,
    /// Same predicate as the `low` status filter.
    pub low_stock_count: usize,
    pub out_of_stock_count: usize,
    /// Σ quantity × price.
    pub total_value: f64,
}

impl InventoryStats {
    pub fn from_products(products: &[Product]) -> Self {
        products.iter().fold(Self::default(), |mut acc, p| {
            acc.total_items += 1;
            if p.is_low_stock() {
                acc.low_stock_count += 1;
            }
            if p.is_out_of_stock() {
                acc.out_of_stock_count += 1;
            }
            acc.total_value += p.value();
            acc
        })
    }

    /// Total value rounded to two decimals, e.g. `"$1234.50"`.
    pub fn formatted_total_value(&self) -> String {
        format!("${:.2}", self.total_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductDraft;
    use chrono::Utc;
    use stockroom_core::ProductId;

    fn product(quantity: u64, price: f64) -> Product {
        Product::create(
            ProductId::generate(),
            ProductDraft::new("Item", "Misc")
                .with_quantity(quantity)
                .with_price(price),
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn aggregates_counts_and_value() {
        let products = vec![product(2, 10.0), product(0, 5.0), product(3, 0.0)];
        let stats = InventoryStats::from_products(&products);

        assert_eq!(stats.total_items, 3);
        assert_eq!(stats.out_of_stock_count, 1);
        assert_eq!(stats.low_stock_count, 2);
        assert_eq!(stats.total_value, 20.0);
        assert_eq!(stats.formatted_total_value(), "$20.00");
    }

    #[test]
    fn empty_inventory() {
        let stats = InventoryStats::from_products(&[]);
        assert_eq!(stats, InventoryStats::default());
        assert_eq!(stats.formatted_total_value(), "$0.00");
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(InventoryStats::from_products(&[product(1, 2.5)])).unwrap();
        assert_eq!(json["totalItems"], 1);
        assert_eq!(json["lowStockCount"], 1);
        assert_eq!(json["outOfStockCount"], 0);
        assert_eq!(json["totalValue"], 2.5);
    }
}
