//! Price history lookups for a single restaurant listing.

use crate::error::{DineMetricsError, Result};
use crate::models::{Platform, PriceHistory, PricePoint, PriceTrend, Restaurant};

// ---------------------------------------------------------------------------
// PriceQuery
// ---------------------------------------------------------------------------

/// Query interface for the 30-day price series carried by each listing.
pub struct PriceQuery<'a> {
    restaurants: &'a [Restaurant],
}

impl<'a> PriceQuery<'a> {
    /// Create a new `PriceQuery` over the given catalog.
    pub fn new(restaurants: &'a [Restaurant]) -> Self {
        Self { restaurants }
    }

    /// Get the daily price series for one product at one restaurant on one platform.
    ///
    /// The restaurant is matched by exact name, the product case-insensitively.
    /// Days are numbered from 1, oldest first.
    pub fn history(
        &self,
        restaurant: &str,
        product: &str,
        platform: Platform,
    ) -> Result<PriceHistory> {
        let found = self
            .restaurants
            .iter()
            .find(|r| r.name == restaurant)
            .ok_or_else(|| DineMetricsError::NotFound(format!("Restaurant '{}'", restaurant)))?;

        let item = found.product(product).ok_or_else(|| {
            DineMetricsError::NotFound(format!("Product '{}' at '{}'", product, restaurant))
        })?;

        let listing = item.listing(platform).ok_or_else(|| {
            DineMetricsError::NotFound(format!(
                "'{}' at '{}' is not listed on {}",
                item.name, restaurant, platform
            ))
        })?;

        let points = listing
            .history
            .iter()
            .enumerate()
            .map(|(i, &price)| PricePoint {
                day: i as u32 + 1,
                price,
            })
            .collect();

        Ok(PriceHistory {
            restaurant: found.name.clone(),
            product: item.name.clone(),
            platform,
            points,
        })
    }

    /// Get aggregated price trend statistics for one listing.
    ///
    /// Returns `min_price`, `max_price`, `avg_price`, the first and last price,
    /// their difference, and the number of data points. An empty history
    /// yields all zeros.
    pub fn trend(&self, restaurant: &str, product: &str, platform: Platform) -> Result<PriceTrend> {
        let history = self.history(restaurant, product, platform)?;
        Ok(summarize(&history.points))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn summarize(points: &[PricePoint]) -> PriceTrend {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return PriceTrend {
            min_price: 0.0,
            max_price: 0.0,
            avg_price: 0.0,
            first_price: 0.0,
            last_price: 0.0,
            change: 0.0,
            data_points: 0,
        };
    };

    let prices = points.iter().map(|p| p.price);
    let min_price = prices.clone().fold(f64::INFINITY, f64::min);
    let max_price = prices.clone().fold(f64::NEG_INFINITY, f64::max);
    let avg_price = prices.sum::<f64>() / points.len() as f64;

    PriceTrend {
        min_price,
        max_price,
        avg_price,
        first_price: first.price,
        last_price: last.price,
        change: last.price - first.price,
        data_points: points.len(),
    }
}
