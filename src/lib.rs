//! dine-metrics: competitive pricing analytics for food-delivery restaurants.
//!
//! Loads a restaurant catalog (per-platform prices, ratings, discounts and
//! 30-day price histories) and a daily sales ledger, then answers two kinds
//! of questions in-process:
//!
//! - which restaurants rank best for a product, within a market segment and
//!   on each delivery platform;
//! - how a month's sales add up, and how the last week compares with the one
//!   before it.
//!
//! # Quick start
//!
//! ```no_run
//! use dine_metrics::{DineMetrics, Segment};
//!
//! let metrics = DineMetrics::builder().data_dir("data").build().unwrap();
//!
//! // Rank restaurants selling a product
//! let results = metrics.search("Cappuccino", Segment::Premium).unwrap();
//!
//! // Summarize a month
//! let summary = metrics.sales("april").unwrap().aggregate();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod queries;

#[cfg(feature = "async")]
pub use async_client::AsyncDineMetrics;
pub use error::{DineMetricsError, Result};
pub use loader::DatasetLoader;
pub use models::{
    DailySalesRecord, DisplayNames, EntrySource, MonthBucket, PeriodHighlights, Platform,
    Product, RankedEntry, Restaurant, SalesSummary, SearchResults, Segment, WeekComparison,
};
pub use queries::{InsightQuery, PriceQuery, RankingEngine, SalesAggregator};

use std::fmt;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// DineMetricsBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`DineMetrics`] instance.
///
/// Use [`DineMetrics::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](DineMetricsBuilder::build) to load the data.
#[derive(Default)]
pub struct DineMetricsBuilder {
    data_dir: Option<PathBuf>,
    display_names: Option<DisplayNames>,
    highlights: Option<Vec<PeriodHighlights>>,
    catalog: Option<(Vec<Restaurant>, Vec<MonthBucket>)>,
}

impl DineMetricsBuilder {
    /// Set the directory the datasets are read from.
    ///
    /// If neither this nor [`catalog`](Self::catalog) is set, the
    /// platform-appropriate default data directory is used (e.g.
    /// `~/.local/share/dine-metrics` on Linux).
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Use an in-memory catalog instead of `analysis.json` / `daily.json`.
    ///
    /// The data is validated exactly as loaded files would be.
    pub fn catalog(mut self, restaurants: Vec<Restaurant>, months: Vec<MonthBucket>) -> Self {
        self.catalog = Some((restaurants, months));
        self
    }

    /// Inject the competitor display-name table, overriding `display_names.json`.
    pub fn display_names(mut self, names: DisplayNames) -> Self {
        self.display_names = Some(names);
        self
    }

    /// Inject the per-month highlight tables, overriding `highlights.json`.
    pub fn highlights(mut self, highlights: Vec<PeriodHighlights>) -> Self {
        self.highlights = Some(highlights);
        self
    }

    /// Load (or take) the datasets and validate them.
    pub fn build(self) -> Result<DineMetrics> {
        let loader = match (&self.catalog, &self.data_dir) {
            (Some(_), None) => None,
            _ => Some(DatasetLoader::new(self.data_dir.clone())?),
        };

        let (restaurants, months) = match self.catalog {
            Some((restaurants, months)) => {
                loader::validate_restaurants(&restaurants)?;
                loader::validate_months(&months)?;
                (restaurants, months)
            }
            None => {
                // Only reachable with a loader
                let loader = loader.as_ref().ok_or_else(|| {
                    DineMetricsError::InvalidArgument("no data source configured".to_string())
                })?;
                (loader.load_restaurants()?, loader.load_months()?)
            }
        };

        let display_names = match (self.display_names, &loader) {
            (Some(names), _) => names,
            (None, Some(loader)) => loader.load_display_names()?,
            (None, None) => DisplayNames::default(),
        };

        let highlights = match (self.highlights, &loader) {
            (Some(highlights), _) => highlights,
            (None, Some(loader)) => loader.load_highlights()?,
            (None, None) => Vec::new(),
        };

        Ok(DineMetrics {
            data_dir: loader.map(|l| l.data_dir),
            restaurants,
            months,
            display_names,
            highlights,
        })
    }
}

// ---------------------------------------------------------------------------
// DineMetrics
// ---------------------------------------------------------------------------

/// The main entry point for the analytics engine.
///
/// Owns the immutable reference data and hands out lightweight borrowing
/// query interfaces. Holds no interior mutability, so it can be shared
/// across threads behind an `Arc`.
///
/// Created via [`DineMetrics::builder()`].
pub struct DineMetrics {
    data_dir: Option<PathBuf>,
    restaurants: Vec<Restaurant>,
    months: Vec<MonthBucket>,
    display_names: DisplayNames,
    highlights: Vec<PeriodHighlights>,
}

impl DineMetrics {
    /// Create a new builder for configuring the engine.
    pub fn builder() -> DineMetricsBuilder {
        DineMetricsBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the product ranking engine.
    pub fn ranking(&self) -> RankingEngine<'_> {
        RankingEngine::new(&self.restaurants)
    }

    /// Rank restaurants for `product` in `segment`.
    ///
    /// Shorthand for `self.ranking().search(product, segment)`.
    pub fn search(&self, product: &str, segment: Segment) -> Result<SearchResults> {
        self.ranking().search(product, segment)
    }

    /// Access the sales aggregator for a month (case-insensitive key).
    pub fn sales(&self, month: &str) -> Result<SalesAggregator<'_>> {
        self.month(month)
            .map(SalesAggregator::new)
            .ok_or_else(|| DineMetricsError::NotFound(format!("Month '{}'", month)))
    }

    /// Access the price history interface.
    pub fn prices(&self) -> PriceQuery<'_> {
        PriceQuery::new(&self.restaurants)
    }

    /// Access the per-month best-seller tables.
    pub fn insights(&self) -> InsightQuery<'_> {
        InsightQuery::new(&self.highlights)
    }

    // -- Reference data ----------------------------------------------------

    /// Look up a month bucket by key (case-insensitive).
    pub fn month(&self, key: &str) -> Option<&MonthBucket> {
        self.months.iter().find(|m| m.is_named(key))
    }

    /// All month buckets, in dataset order.
    pub fn months(&self) -> &[MonthBucket] {
        &self.months
    }

    /// All restaurants, in catalog order.
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// The competitor display-name table.
    pub fn display_names(&self) -> &DisplayNames {
        &self.display_names
    }

    /// The directory datasets were loaded from, if any.
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for DineMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = self
            .data_dir
            .as_ref()
            .map(|d| d.display().to_string())
            .unwrap_or_else(|| "<in-memory>".to_string());
        write!(
            f,
            "DineMetrics(data_dir={}, restaurants={}, months=[{}])",
            source,
            self.restaurants.len(),
            self.months
                .iter()
                .map(|m| m.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
