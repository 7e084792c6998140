//! Stock status tiers.

use serde::{Deserialize, Serialize};

/// Where a product sits relative to its restock threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "out")]
    OutOfStock,
    #[serde(rename = "low")]
    LowStock,
    #[serde(rename = "medium")]
    MediumStock,
    #[serde(rename = "high")]
    InStock,
}

impl StockStatus {
    /// Short machine key (`out`, `low`, `medium`, `high`).
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "out",
            StockStatus::LowStock => "low",
            StockStatus::MediumStock => "medium",
            StockStatus::InStock => "high",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::MediumStock => "Medium Stock",
            StockStatus::InStock => "In Stock",
        }
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify `quantity` against `low_stock_alert`.
///
/// Boundaries belong to the lower tier: exactly the threshold is still low,
/// exactly twice the threshold is still medium.
pub fn derive_status(quantity: u64, low_stock_alert: u64) -> StockStatus {
    if quantity == 0 {
        StockStatus::OutOfStock
    } else if quantity <= low_stock_alert {
        StockStatus::LowStock
    } else if quantity <= low_stock_alert.saturating_mul(2) {
        StockStatus::MediumStock
    } else {
        StockStatus::InStock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(derive_status(0, 10), StockStatus::OutOfStock);
        assert_eq!(derive_status(1, 10), StockStatus::LowStock);
        assert_eq!(derive_status(10, 10), StockStatus::LowStock);
        assert_eq!(derive_status(11, 10), StockStatus::MediumStock);
        assert_eq!(derive_status(20, 10), StockStatus::MediumStock);
        assert_eq!(derive_status(21, 10), StockStatus::InStock);
    }

    #[test]
    fn threshold_of_one() {
        assert_eq!(derive_status(1, 1), StockStatus::LowStock);
        assert_eq!(derive_status(2, 1), StockStatus::MediumStock);
        assert_eq!(derive_status(3, 1), StockStatus::InStock);
    }

    #[test]
    fn huge_threshold_does_not_overflow() {
        assert_eq!(derive_status(u64::MAX, u64::MAX), StockStatus::LowStock);
        assert_eq!(derive_status(u64::MAX, u64::MAX / 2 + 1), StockStatus::MediumStock);
    }

    #[test]
    fn labels_and_keys() {
        assert_eq!(StockStatus::OutOfStock.to_string(), "Out of Stock");
        assert_eq!(StockStatus::MediumStock.label(), "Medium Stock");
        assert_eq!(StockStatus::InStock.as_str(), "high");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: the tier boundaries hold for every positive threshold.
            #[test]
            fn boundaries_hold_for_any_threshold(threshold in 1u64..1_000_000) {
                prop_assert_eq!(derive_status(0, threshold), StockStatus::OutOfStock);
                prop_assert_eq!(derive_status(threshold, threshold), StockStatus::LowStock);
                prop_assert_eq!(derive_status(threshold + 1, threshold), StockStatus::MediumStock);
                prop_assert_eq!(derive_status(2 * threshold, threshold), StockStatus::MediumStock);
                prop_assert_eq!(derive_status(2 * threshold + 1, threshold), StockStatus::InStock);
            }

            /// Property: status never moves down a tier as quantity grows.
            #[test]
            fn status_is_monotonic_in_quantity(threshold in 1u64..1000, a in 0u64..5000, b in 0u64..5000) {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                let rank = |s: StockStatus| match s {
                    StockStatus::OutOfStock => 0,
                    StockStatus::LowStock => 1,
                    StockStatus::MediumStock => 2,
                    StockStatus::InStock => 3,
                };
                prop_assert!(rank(derive_status(lo, threshold)) <= rank(derive_status(hi, threshold)));
            }
        }
    }
}
