use serde::{Deserialize, Serialize};

use super::restaurant::Platform;

// ---------------------------------------------------------------------------
// PricePoint — Single day of a listing's price history
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub day: u32,
    pub price: f64,
}

// ---------------------------------------------------------------------------
// PriceHistory — Daily price series for one restaurant/product/platform
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PriceHistory {
    pub restaurant: String,
    pub product: String,
    pub platform: Platform,
    pub points: Vec<PricePoint>,
}

// ---------------------------------------------------------------------------
// PriceTrend — Aggregated price trend data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PriceTrend {
    pub min_price: f64,
    pub max_price: f64,
    pub avg_price: f64,
    pub first_price: f64,
    pub last_price: f64,
    pub change: f64,
    pub data_points: usize,
}
