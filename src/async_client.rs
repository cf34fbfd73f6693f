//! Async wrapper around [`DineMetrics`] for use in async runtimes (Tokio, etc.).
//!
//! Loading runs on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], as do queries issued through
//! [`run()`](AsyncDineMetrics::run). The engine has no interior mutability,
//! so one loaded instance is shared by every task through an [`Arc`].
//!
//! # Example
//!
//! ```no_run
//! use dine_metrics::{AsyncDineMetrics, Segment};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let metrics = AsyncDineMetrics::builder().data_dir("data").build().await.unwrap();
//!
//!     let results = metrics.search("Latte", Segment::Premium).await.unwrap();
//!     let summary = metrics.summary("april").await.unwrap();
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{DineMetricsError, Result};
use crate::models::{DisplayNames, PeriodHighlights, SalesSummary, SearchResults, Segment};
use crate::DineMetrics;

// ---------------------------------------------------------------------------
// AsyncDineMetricsBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncDineMetrics`] instance.
#[derive(Default)]
pub struct AsyncDineMetricsBuilder {
    data_dir: Option<PathBuf>,
    display_names: Option<DisplayNames>,
    highlights: Option<Vec<PeriodHighlights>>,
}

impl AsyncDineMetricsBuilder {
    /// Set the directory the datasets are read from.
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Inject the competitor display-name table.
    pub fn display_names(mut self, names: DisplayNames) -> Self {
        self.display_names = Some(names);
        self
    }

    /// Inject the per-month highlight tables.
    pub fn highlights(mut self, highlights: Vec<PeriodHighlights>) -> Self {
        self.highlights = Some(highlights);
        self
    }

    /// Load the datasets on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncDineMetrics> {
        tokio::task::spawn_blocking(move || {
            let mut builder = DineMetrics::builder();
            if let Some(dir) = self.data_dir {
                builder = builder.data_dir(dir);
            }
            if let Some(names) = self.display_names {
                builder = builder.display_names(names);
            }
            if let Some(highlights) = self.highlights {
                builder = builder.highlights(highlights);
            }
            Ok(AsyncDineMetrics::from(builder.build()?))
        })
        .await
        .map_err(|e| DineMetricsError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncDineMetrics
// ---------------------------------------------------------------------------

/// Async wrapper around [`DineMetrics`].
///
/// Cloning is cheap and shares the loaded datasets.
///
/// # Usage
///
/// Use [`run()`](Self::run) to execute any sync method:
///
/// ```no_run
/// # use dine_metrics::AsyncDineMetrics;
/// # async fn example() -> dine_metrics::Result<()> {
/// let metrics = AsyncDineMetrics::builder().build().await?;
/// let comparison = metrics.run(|m| Ok(m.sales("april")?.week_comparison())).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AsyncDineMetrics {
    inner: Arc<DineMetrics>,
}

impl From<DineMetrics> for AsyncDineMetrics {
    fn from(metrics: DineMetrics) -> Self {
        Self {
            inner: Arc::new(metrics),
        }
    }
}

impl AsyncDineMetrics {
    /// Create a new builder for configuring the async engine.
    pub fn builder() -> AsyncDineMetricsBuilder {
        AsyncDineMetricsBuilder::default()
    }

    /// Run a sync operation on the blocking thread pool.
    ///
    /// The closure receives a `&DineMetrics` reference and should return
    /// a `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&DineMetrics) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let metrics = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&metrics))
            .await
            .map_err(|e| DineMetricsError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Rank restaurants for a product asynchronously.
    pub async fn search(&self, product: &str, segment: Segment) -> Result<SearchResults> {
        let product = product.to_string();
        self.run(move |m| m.search(&product, segment)).await
    }

    /// Aggregate a month's sales asynchronously.
    pub async fn summary(&self, month: &str) -> Result<SalesSummary> {
        let month = month.to_string();
        self.run(move |m| Ok(m.sales(&month)?.aggregate())).await
    }

    /// Borrow the underlying engine for synchronous use.
    pub fn inner(&self) -> &DineMetrics {
        &self.inner
    }
}
