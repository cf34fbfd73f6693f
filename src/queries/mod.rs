//! Query modules for the dine-metrics engine.
//!
//! Each module provides a query struct that borrows from the loaded datasets
//! and exposes pure methods over them. Nothing here mutates its input or
//! keeps state between calls.

pub mod insights;
pub mod prices;
pub mod ranking;
pub mod sales;

pub use insights::InsightQuery;
pub use prices::PriceQuery;
pub use ranking::{search, RankingEngine};
pub use sales::SalesAggregator;
