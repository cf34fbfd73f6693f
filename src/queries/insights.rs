//! Best-seller tables for a period.
//!
//! These are static lookup tables shipped alongside the sales ledger
//! (`highlights.json`) or injected through the builder; nothing here is
//! derived from the daily records.

use crate::error::{DineMetricsError, Result};
use crate::models::{PeriodHighlights, TopCategory, TopProduct};

// ---------------------------------------------------------------------------
// InsightQuery
// ---------------------------------------------------------------------------

/// Query interface for per-month top products and categories.
pub struct InsightQuery<'a> {
    highlights: &'a [PeriodHighlights],
}

impl<'a> InsightQuery<'a> {
    /// Create a new `InsightQuery` over the given tables.
    pub fn new(highlights: &'a [PeriodHighlights]) -> Self {
        Self { highlights }
    }

    /// Get the highlight tables for a month (case-insensitive).
    pub fn highlights(&self, month: &str) -> Result<&'a PeriodHighlights> {
        let key = month.trim().to_lowercase();
        self.highlights
            .iter()
            .find(|h| h.month.trim().to_lowercase() == key)
            .ok_or_else(|| DineMetricsError::NotFound(format!("No highlights for month '{}'", month)))
    }

    /// The first `limit` top-selling products of a month, in table order.
    pub fn top_products(&self, month: &str, limit: usize) -> Result<&'a [TopProduct]> {
        let products = &self.highlights(month)?.top_products;
        Ok(&products[..limit.min(products.len())])
    }

    /// The first `limit` top-selling categories of a month, in table order.
    pub fn top_categories(&self, month: &str, limit: usize) -> Result<&'a [TopCategory]> {
        let categories = &self.highlights(month)?.top_categories;
        Ok(&categories[..limit.min(categories.len())])
    }

    /// Months that have highlight tables.
    pub fn months(&self) -> Vec<&'a str> {
        self.highlights.iter().map(|h| h.month.as_str()).collect()
    }
}
