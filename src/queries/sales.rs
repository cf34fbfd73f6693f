//! Period totals and week-over-week comparison over one month of sales.

use crate::config;
use crate::error::Result;
use crate::loader;
use crate::models::{MonthBucket, SalesSummary, WeekComparison};

// ---------------------------------------------------------------------------
// SalesAggregator
// ---------------------------------------------------------------------------

/// Derives sales metrics from a borrowed [`MonthBucket`].
///
/// The bucket is trusted to be well formed (see [`loader::validate_month`]);
/// use [`SalesAggregator::checked`] for data that has not been through the
/// loader.
pub struct SalesAggregator<'a> {
    month: &'a MonthBucket,
}

impl<'a> SalesAggregator<'a> {
    /// Create a new `SalesAggregator` over the given month.
    pub fn new(month: &'a MonthBucket) -> Self {
        Self { month }
    }

    /// Like [`new`](Self::new), but rejects a malformed month with
    /// [`DineMetricsError::MalformedPeriod`](crate::DineMetricsError::MalformedPeriod).
    pub fn checked(month: &'a MonthBucket) -> Result<Self> {
        loader::validate_month(month)?;
        Ok(Self::new(month))
    }

    /// The month this aggregator reads from.
    pub fn month(&self) -> &'a MonthBucket {
        self.month
    }

    /// Total sales, total orders and the rounded average order value.
    pub fn aggregate(&self) -> SalesSummary {
        let total_sales: f64 = self.month.sales.iter().map(|r| r.amount).sum();
        let total_orders = self
            .month
            .sales
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.orders));
        let average_order_value = if total_orders > 0 {
            (total_sales / total_orders as f64).round()
        } else {
            0.0
        };

        tracing::debug!(
            month = %self.month.name,
            days = self.month.sales.len(),
            total_sales,
            total_orders,
            "aggregated month"
        );

        SalesSummary {
            total_sales,
            total_orders,
            average_order_value,
        }
    }

    /// The last seven days against the seven days before them.
    ///
    /// Returns `None` when the month has fewer than two full weeks of records;
    /// that is "no comparison available", not an error.
    pub fn week_comparison(&self) -> Option<WeekComparison> {
        let sales = &self.month.sales;
        if sales.len() < 2 * config::WEEK_LEN {
            return None;
        }

        let split = sales.len() - config::WEEK_LEN;
        let previous = &sales[split - config::WEEK_LEN..split];
        let current = &sales[split..];

        Some(WeekComparison {
            current_week: current.iter().map(|r| r.amount).collect(),
            previous_week: previous.iter().map(|r| r.amount).collect(),
            current_days: current.iter().map(|r| r.day).collect(),
            previous_days: previous.iter().map(|r| r.day).collect(),
        })
    }

    /// Every `(day, amount)` pair of the month, in ledger order.
    pub fn daily_series(&self) -> Vec<(u32, f64)> {
        self.month.sales.iter().map(|r| (r.day, r.amount)).collect()
    }
}
