//! Product search across the restaurant catalog.
//!
//! Given a product name and a segment, builds three independent top-N lists:
//! competitors within the segment (ranked on their Zomato listing) and the
//! best entries on each delivery platform across the whole catalog.

use crate::config;
use crate::error::{DineMetricsError, Result};
use crate::models::restaurant::fold_name;
use crate::models::{
    EntrySource, Platform, PlatformListing, RankedEntry, Restaurant, SearchResults, Segment,
};

// ---------------------------------------------------------------------------
// RankingEngine
// ---------------------------------------------------------------------------

/// Ranks restaurants carrying a product, borrowing an immutable catalog.
pub struct RankingEngine<'a> {
    restaurants: &'a [Restaurant],
}

impl<'a> RankingEngine<'a> {
    /// Create a new `RankingEngine` over the given catalog.
    pub fn new(restaurants: &'a [Restaurant]) -> Self {
        Self { restaurants }
    }

    /// Search the catalog for `query` and rank the matches.
    ///
    /// Product names match case-insensitively and exactly, after trimming.
    /// Each list is sorted by rating, highest first, and cut to
    /// [`config::TOP_N`] entries; equal ratings keep catalog order.
    ///
    /// A query that matches nothing yields three empty lists. An empty or
    /// whitespace-only query fails with [`DineMetricsError::InvalidQuery`].
    pub fn search(&self, query: &str, segment: Segment) -> Result<SearchResults> {
        let key = fold_name(query);
        if key.is_empty() {
            return Err(DineMetricsError::InvalidQuery(
                "product name must not be empty".to_string(),
            ));
        }

        let mut results = SearchResults::default();

        for restaurant in self.restaurants {
            let Some(product) = restaurant.product_by_key(&key) else {
                continue;
            };

            if restaurant.segment == segment {
                if let Some(listing) = product.listing(Platform::Zomato) {
                    results.competitors.push(entry(
                        restaurant,
                        &listing,
                        EntrySource::Segment(restaurant.segment),
                    ));
                }
            }

            for platform in Platform::ALL {
                if let Some(listing) = product.listing(platform) {
                    let list = match platform {
                        Platform::Zomato => &mut results.zomato,
                        Platform::Swiggy => &mut results.swiggy,
                    };
                    list.push(entry(restaurant, &listing, EntrySource::Platform(platform)));
                }
            }
        }

        rank(&mut results.competitors);
        rank(&mut results.zomato);
        rank(&mut results.swiggy);

        tracing::debug!(
            query = %key,
            segment = %segment,
            competitors = results.competitors.len(),
            zomato = results.zomato.len(),
            swiggy = results.swiggy.len(),
            "ranked product search"
        );

        Ok(results)
    }
}

/// Search `catalog` for `query` without constructing an engine first.
pub fn search(query: &str, segment: Segment, catalog: &[Restaurant]) -> Result<SearchResults> {
    RankingEngine::new(catalog).search(query, segment)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn entry(restaurant: &Restaurant, listing: &PlatformListing<'_>, source: EntrySource) -> RankedEntry {
    RankedEntry {
        name: restaurant.name.clone(),
        rating: listing.rating,
        price: listing.price,
        discount: listing.discount.to_string(),
        segment: restaurant.segment,
        source,
    }
}

/// Sort by rating descending (stable) and keep the top entries.
fn rank(entries: &mut Vec<RankedEntry>) {
    entries.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    entries.truncate(config::TOP_N);
}
