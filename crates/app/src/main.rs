//! Opens the local inventory, seeds the demo catalog on first run and logs a
//! stock summary.

use anyhow::Context;

use stockroom_infra::{FileBlobStore, InventoryStore, StorageConfig};
use stockroom_inventory::{FilterSpec, SortSpec, StatusFilter};

const ENV_SEED_SAMPLES: &str = "STOCKROOM_SEED_SAMPLES";

fn seed_samples_enabled() -> bool {
    match std::env::var(ENV_SEED_SAMPLES) {
        Ok(v) => matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => true,
    }
}

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = StorageConfig::from_env();
    let blobs = FileBlobStore::open(&config.data_dir)
        .with_context(|| format!("failed to open data directory {:?}", config.data_dir))?;

    let mut store = InventoryStore::load(blobs, config.key.clone());

    if seed_samples_enabled() {
        let seeded = store.seed_samples();
        if seeded > 0 {
            tracing::info!(seeded, "populated empty inventory with sample products");
        }
    }

    let stats = store.stats();
    tracing::info!(
        data_dir = %config.data_dir.display(),
        key = %config.key,
        total_items = stats.total_items,
        low_stock = stats.low_stock_count,
        out_of_stock = stats.out_of_stock_count,
        total_value = %stats.formatted_total_value(),
        "inventory summary"
    );

    let needs_restock = store.query(&FilterSpec::status(StatusFilter::Low), &SortSpec::default());
    let sold_out = store.query(&FilterSpec::status(StatusFilter::Out), &SortSpec::default());
    for product in needs_restock.iter().chain(sold_out.iter()) {
        tracing::warn!(
            product_id = %product.id_typed(),
            name = product.name(),
            quantity = product.quantity(),
            low_stock_alert = product.low_stock_alert(),
            status = %product.status(),
            "restock needed"
        );
    }

    Ok(())
}
