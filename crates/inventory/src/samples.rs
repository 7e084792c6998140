//! Demo catalog used to populate an empty inventory on first run.

use crate::product::ProductDraft;

pub fn sample_catalog() -> Vec<ProductDraft> {
    vec![
        ProductDraft::new("Wireless Headphones", "Electronics")
            .with_quantity(25)
            .with_price(79.99)
            .with_low_stock_alert(10),
        ProductDraft::new("Coffee Mug", "Home & Garden")
            .with_quantity(8)
            .with_price(12.50)
            .with_low_stock_alert(10),
        ProductDraft::new("Running Shoes", "Sports & Outdoor")
            .with_quantity(0)
            .with_price(120.00)
            .with_low_stock_alert(5),
        ProductDraft::new("Programming Book", "Books & Media")
            .with_quantity(15)
            .with_price(45.99)
            .with_low_stock_alert(8),
    ]
}
