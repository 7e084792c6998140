//! Blob encoding of the product collection.
//!
//! The blob is a JSON array of product objects
//! (`id, name, category, quantity, price, lowStockAlert, createdAt`).

use std::collections::HashSet;

use stockroom_core::Entity;
use stockroom_inventory::Product;

use crate::blob_store::BlobStoreError;

pub fn encode(products: &[Product]) -> Result<String, BlobStoreError> {
    Ok(serde_json::to_string(products)?)
}

/// Decode a blob, keeping the first record for any repeated id.
pub fn decode(blob: &str) -> Result<Vec<Product>, BlobStoreError> {
    let products: Vec<Product> = serde_json::from_str(blob)?;

    let mut seen = HashSet::with_capacity(products.len());
    let mut unique = Vec::with_capacity(products.len());
    for product in products {
        if seen.insert(product.id().clone()) {
            unique.push(product);
        } else {
            tracing::warn!(product_id = %product.id(), "dropping duplicate product id from stored inventory");
        }
    }

    Ok(unique)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use stockroom_inventory::ProductDraft;

    fn product(id: &str, name: &str) -> Product {
        Product::create(
            id.parse().unwrap(),
            ProductDraft::new(name, "Electronics")
                .with_quantity(3)
                .with_price(79.99)
                .with_low_stock_alert(4),
            Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap() + chrono::Duration::milliseconds(123),
        )
        .unwrap()
    }

    #[test]
    fn encode_decode_is_lossless() {
        let products = vec![product("a", "Headphones"), product("b", "Cable")];
        let blob = encode(&products).unwrap();
        assert_eq!(decode(&blob).unwrap(), products);
    }

    #[test]
    fn decodes_blob_written_by_browser_tracker() {
        let blob = r#"[{"id":"1717171717171k3j9x0abc","name":"Coffee Mug","category":"Home & Garden",
            "quantity":8,"price":12.5,"lowStockAlert":10,"createdAt":"2024-06-01T12:00:00.000Z"}]"#;
        let products = decode(blob).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id().as_str(), "1717171717171k3j9x0abc");
        assert_eq!(products[0].price(), 12.5);
        assert_eq!(products[0].created_at(), Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn duplicate_ids_keep_first() {
        let products = vec![product("a", "First"), product("a", "Second")];
        let blob = serde_json::to_string(&products).unwrap();
        let decoded = decode(&blob).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].name(), "First");
    }

    #[test]
    fn garbage_is_a_codec_error() {
        assert!(matches!(decode("not json"), Err(BlobStoreError::Codec(_))));
        assert!(matches!(decode(r#"{"id":"a"}"#), Err(BlobStoreError::Codec(_))));
        assert!(matches!(
            decode(r#"[{"id":"","name":"x","category":"y","quantity":1,"createdAt":"2024-01-01T00:00:00Z"}]"#),
            Err(BlobStoreError::Codec(_))
        ));
    }

    #[test]
    fn negative_numbers_are_normalized_not_rejected() {
        let blob = r#"[
            {"id":"1","name":"Coffee Mug","category":"Home & Garden","quantity":8,"price":12.5,
             "lowStockAlert":10,"createdAt":"2024-06-01T12:00:00.000Z"},
            {"id":"2","name":"Cable","category":"Electronics","quantity":-1,"price":4,
             "lowStockAlert":-5,"createdAt":"2024-06-01T12:00:00.000Z"}
        ]"#;
        let products = decode(blob).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].low_stock_alert(), 10);
        assert_eq!(products[1].quantity(), 0);
        assert_eq!(products[1].low_stock_alert(), 10);
    }
}
