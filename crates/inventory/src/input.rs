//! Coercion of raw form input into a `ProductDraft`.
//!
//! Numeric fields are parsed leniently: leading whitespace is skipped and the
//! longest numeric prefix is used ("12 units" → 12). Anything unparsable falls
//! back to the field default rather than failing; only the name is validated,
//! and that happens when the draft is applied.

use serde::{Deserialize, Serialize};

use crate::product::{DEFAULT_LOW_STOCK_ALERT, ProductDraft};

/// Product form fields exactly as the UI collected them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProductInput {
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub price: String,
    pub low_stock_alert: String,
}

impl RawProductInput {
    /// Coerce into a typed draft.
    ///
    /// - quantity: integer, failure or negative → 0
    /// - price: decimal, failure, negative or non-finite → 0
    /// - low stock alert: integer, failure or non-positive → 10
    pub fn into_draft(self) -> ProductDraft {
        let quantity = match leading_integer(&self.quantity) {
            Some(n) if n > 0 => n as u64,
            _ => 0,
        };

        let price = match leading_decimal(&self.price) {
            Some(p) if p.is_finite() && p > 0.0 => p,
            _ => 0.0,
        };

        let low_stock_alert = match leading_integer(&self.low_stock_alert) {
            Some(n) if n > 0 => n as u64,
            _ => DEFAULT_LOW_STOCK_ALERT,
        };

        ProductDraft {
            name: self.name.trim().to_string(),
            category: self.category,
            quantity,
            price,
            low_stock_alert,
        }
    }
}

/// Parse an optionally signed integer prefix. Out-of-range values saturate.
fn leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }

    let prefix = &s[..end];
    match prefix.parse::<i64>() {
        Ok(n) => Some(n),
        Err(_) if prefix.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

/// Parse an optionally signed decimal prefix (`12`, `12.5`, `.5`, `1e3`).
fn leading_decimal(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
            digits += 1;
        }
        end = frac_end;
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}
