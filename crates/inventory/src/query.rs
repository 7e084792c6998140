//! Filtering and sorting of the product list.

use core::cmp::Ordering;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockroom_core::DomainError;

use crate::product::Product;

/// Columns the product table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Name,
    Category,
    Quantity,
    Price,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Category => "category",
            SortField::Quantity => "quantity",
            SortField::Price => "price",
        }
    }

    /// Ascending comparison of two products on this field.
    ///
    /// Text columns compare case-insensitively.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortField::Name => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
            SortField::Category => a
                .category()
                .to_lowercase()
                .cmp(&b.category().to_lowercase()),
            SortField::Quantity => a.quantity().cmp(&b.quantity()),
            SortField::Price => a.price().total_cmp(&b.price()),
        }
    }
}

impl FromStr for SortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "category" => Ok(SortField::Category),
            "quantity" => Ok(SortField::Quantity),
            "price" => Ok(SortField::Price),
            other => Err(DomainError::validation(format!("unknown sort field: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Current sort selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::ascending(SortField::Name)
    }
}

impl SortSpec {
    pub fn ascending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn descending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }

    /// Column-header click: the same field flips direction, a new field
    /// starts ascending.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            *self = Self::ascending(field);
        }
    }

    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let ord = self.field.compare(a, b);
        match self.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

/// Stock-level filter.
///
/// `High` keeps everything above the threshold, i.e. both the medium and the
/// in-stock tiers of [`crate::StockStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Low,
    Out,
    High,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Low => "low",
            StatusFilter::Out => "out",
            StatusFilter::High => "high",
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Low => product.is_low_stock(),
            StatusFilter::Out => product.is_out_of_stock(),
            StatusFilter::High => product.is_above_threshold(),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            "low" => Ok(StatusFilter::Low),
            "out" => Ok(StatusFilter::Out),
            "high" => Ok(StatusFilter::High),
            other => Err(DomainError::validation(format!("unknown status filter: {other}"))),
        }
    }
}

/// Search box + status dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    pub search_term: String,
    pub status: StatusFilter,
}

impl FilterSpec {
    pub fn new(search_term: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            search_term: search_term.into(),
            status,
        }
    }

    pub fn search(search_term: impl Into<String>) -> Self {
        Self::new(search_term, StatusFilter::All)
    }

    pub fn status(status: StatusFilter) -> Self {
        Self::new(String::new(), status)
    }

    /// Whether `product` passes both the search term and the status filter.
    pub fn matches(&self, product: &Product) -> bool {
        matches_search(product, &self.search_term.to_lowercase()) && self.status.matches(product)
    }
}

/// `needle` must already be lowercase; empty matches everything.
fn matches_search(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || product.name().to_lowercase().contains(needle)
        || product.category().to_lowercase().contains(needle)
}

/// Filter then sort `products`.
///
/// The result borrows from `products`; it is a view, not a snapshot.
pub fn query<'a>(products: &'a [Product], filter: &FilterSpec, sort: &SortSpec) -> Vec<&'a Product> {
    let needle = filter.search_term.to_lowercase();

    let mut view: Vec<&Product> = products
        .iter()
        .filter(|p| matches_search(p, &needle))
        .filter(|p| filter.status.matches(p))
        .collect();

    view.sort_by(|a, b| sort.compare(a, b));
    view
}

/// Why a query view came back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyState {
    /// The inventory itself has no products.
    NoProducts,
    /// Products exist but the current filters exclude all of them.
    NoMatches,
}

impl EmptyState {
    /// `None` when the view has rows to show.
    pub fn classify(total_products: usize, view_len: usize) -> Option<Self> {
        if view_len > 0 {
            None
        } else if total_products == 0 {
            Some(EmptyState::NoProducts)
        } else {
            Some(EmptyState::NoMatches)
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            EmptyState::NoProducts => "No products in inventory",
            EmptyState::NoMatches => "No products match your search",
        }
    }
}
