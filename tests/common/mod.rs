//! Shared test fixtures for the dine-metrics integration tests.
//!
//! Provides `setup_sample_data()` which writes small sample datasets
//! (restaurants, months, display names, highlights) as JSON files into a
//! temporary data directory and loads them through the builder.

#![allow(dead_code)]

use dine_metrics::{DailySalesRecord, DineMetrics, MonthBucket, Platform, Product, Restaurant, Segment};
use std::fs;
use std::path::Path;

/// Load a `DineMetrics` instance from sample datasets in a temp directory.
///
/// Returns `(DineMetrics, tempfile::TempDir)`. The caller must keep the
/// `TempDir` alive for the duration of the test.
pub fn setup_sample_data() -> (DineMetrics, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    write_sample_datasets(tmp_dir.path());
    let metrics = DineMetrics::builder().data_dir(tmp_dir.path()).build().unwrap();
    (metrics, tmp_dir)
}

/// Write all four sample datasets into `dir`.
pub fn write_sample_datasets(dir: &Path) {
    write_json(dir, "analysis.json", &restaurants_json());
    write_json(dir, "daily.json", &months_json());
    write_json(
        dir,
        "display_names.json",
        &serde_json::json!({
            "True Black": "Neighbourhood Favourite",
            "Roastery Coffee House": "Premium Roast Hub",
            "Makobrew": "High-ValueSpot"
        }),
    );
    write_json(dir, "highlights.json", &highlights_json());
}

pub fn write_json(dir: &Path, file: &str, value: &serde_json::Value) {
    fs::write(dir.join(file), serde_json::to_string_pretty(value).unwrap()).unwrap();
}

/// A 30-day price series drifting up from `base`.
pub fn history(base: f64) -> Vec<f64> {
    (0..30).map(|i| base + (i % 5) as f64).collect()
}

fn product_json(name: &str, zomato: (f64, f64, &str), swiggy: Option<(f64, f64, &str)>) -> serde_json::Value {
    let mut value = serde_json::json!({
        "Product": name,
        "todayPriceZomato": zomato.0,
        "ZomatoRating": zomato.1,
        "ZomatoDiscount": zomato.2,
        "past30DaysZomato": history(zomato.0),
    });
    if let Some((price, rating, discount)) = swiggy {
        let obj = value.as_object_mut().unwrap();
        obj.insert("todayPriceSwiggy".into(), price.into());
        obj.insert("SwiggyRating".into(), rating.into());
        obj.insert("SwiggyDiscount".into(), discount.into());
        obj.insert("past30DaysSwiggy".into(), history(price).into());
    }
    value
}

/// Six cafés across the three segments.
///
/// Cappuccino ratings (Zomato / Swiggy):
/// True Black 4.6/4.4, Roastery 4.8/4.7, Theory 4.2/4.9,
/// Makobrew 4.5/4.1, Harley's 4.1/4.6. Blue Tokai does not sell it.
pub fn restaurants_json() -> serde_json::Value {
    serde_json::json!([
        {
            "name": "True Black",
            "type": "Premium",
            "products": [
                product_json("Cappuccino", (220.0, 4.6, "10%"), Some((230.0, 4.4, "5%"))),
                product_json("Latte", (240.0, 4.3, "0%"), Some((245.0, 4.5, "0%"))),
            ]
        },
        {
            "name": "Roastery Coffee House",
            "type": "Premium",
            "products": [
                product_json("Cappuccino", (250.0, 4.8, "15%"), Some((255.0, 4.7, "10%"))),
            ]
        },
        {
            "name": "Theory Cafe",
            "type": "Mid-tier",
            "products": [
                product_json("Cappuccino", (180.0, 4.2, "20%"), Some((175.0, 4.9, "25%"))),
                product_json("Espresso", (120.0, 4.0, "5%"), Some((125.0, 3.9, "5%"))),
            ]
        },
        {
            "name": "Makobrew",
            "type": "Budget",
            "products": [
                product_json("Cappuccino", (140.0, 4.5, "30%"), Some((150.0, 4.1, "20%"))),
                product_json("Mocha", (160.0, 4.4, "10%"), None),
            ]
        },
        {
            "name": "Harley's Cafe",
            "type": "Premium",
            "products": [
                product_json("Cappuccino", (260.0, 4.1, "0%"), Some((265.0, 4.6, "0%"))),
            ]
        },
        {
            "name": "Blue Tokai",
            "type": "Mid-tier",
            "products": [
                product_json("Flat White", (210.0, 4.4, "0%"), Some((215.0, 4.3, "0%"))),
            ]
        }
    ])
}

fn ledger(days: u32, base: f64, step: f64) -> Vec<serde_json::Value> {
    (1..=days)
        .map(|day| {
            serde_json::json!({
                "day": day,
                "amount": base + step * day as f64,
                "no_of_orders": 5 + day % 3,
            })
        })
        .collect()
}

/// "april" (30 days), "March" (31 days) and "week" (7 days).
pub fn months_json() -> serde_json::Value {
    serde_json::json!([
        { "month": "april", "sales": ledger(30, 1000.0, 10.0) },
        { "month": "March", "sales": ledger(31, 900.0, 5.0) },
        { "month": "week", "sales": ledger(7, 500.0, 0.0) },
    ])
}

pub fn highlights_json() -> serde_json::Value {
    serde_json::json!([
        {
            "month": "april",
            "topProducts": [
                { "name": "Cappuccino", "sharePct": 3.0, "unitsSold": 567 },
                { "name": "Butter Croissant", "sharePct": 2.3, "unitsSold": 388 },
                { "name": "Alfredo", "sharePct": 2.6, "unitsSold": 254 }
            ],
            "topCategories": [
                { "name": "Sandwiches & Burgers", "sharePct": 27.0 },
                { "name": "Bagels & Croissants", "sharePct": 19.0 },
                { "name": "Deserts", "sharePct": 12.0 }
            ]
        },
        {
            "month": "march",
            "topProducts": [
                { "name": "Flat White", "sharePct": 3.7, "unitsSold": 483 }
            ],
            "topCategories": []
        }
    ])
}

// ---------------------------------------------------------------------------
// In-memory builders
// ---------------------------------------------------------------------------

/// A product listed on Zomato only, with a flat history.
pub fn zomato_only(name: &str, price: f64, rating: f64) -> Product {
    Product::new(name).with_listing(Platform::Zomato, price, rating, "0%", history(price))
}

/// A product listed on both platforms.
pub fn both_platforms(name: &str, zomato: (f64, f64), swiggy: (f64, f64)) -> Product {
    Product::new(name)
        .with_listing(Platform::Zomato, zomato.0, zomato.1, "10%", history(zomato.0))
        .with_listing(Platform::Swiggy, swiggy.0, swiggy.1, "5%", history(swiggy.0))
}

pub fn restaurant(name: &str, segment: Segment, products: Vec<Product>) -> Restaurant {
    Restaurant::new(name, segment, products)
}

/// A month with `days` contiguous records; day `d` sells `d * 100` over `d` orders.
pub fn month_with_days(name: &str, days: u32) -> MonthBucket {
    MonthBucket::new(
        name,
        (1..=days)
            .map(|d| DailySalesRecord::new(d, d as f64 * 100.0, d as u64))
            .collect(),
    )
}
