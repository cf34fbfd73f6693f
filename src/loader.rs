//! Dataset loader for the restaurant catalog and sales ledger.
//!
//! Reads the reference datasets from a local data directory. Files may be
//! stored plain (`analysis.json`) or gzip-compressed (`analysis.json.gz`);
//! the compressed variant wins when both exist. Every dataset is checked for
//! structural integrity on load so the query engines can trust their input.

use crate::config;
use crate::error::{DineMetricsError, Result};
use crate::models::{
    DailySalesRecord, DisplayNames, MonthBucket, PeriodHighlights, Platform, Restaurant,
};
use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Locates and parses the reference datasets in a data directory.
pub struct DatasetLoader {
    /// Directory the datasets are read from.
    pub data_dir: PathBuf,
}

impl DatasetLoader {
    /// Create a new loader.
    ///
    /// If `data_dir` is `None`, uses the platform-appropriate default data directory.
    /// Creates the directory if it does not exist.
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let dir = data_dir.unwrap_or_else(config::default_data_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self { data_dir: dir })
    }

    /// Resolve the local path for a logical dataset name.
    ///
    /// Returns the `.gz` variant if present, otherwise the plain file path
    /// (which may not exist yet).
    pub fn dataset_path(&self, name: &str) -> Result<PathBuf> {
        let files = config::dataset_files();
        let filename = files.get(name).ok_or_else(|| {
            DineMetricsError::NotFound(format!("Unknown dataset: {}", name))
        })?;

        let plain = self.data_dir.join(filename);
        let gz = self.data_dir.join(format!("{}.gz", filename));
        if gz.exists() {
            Ok(gz)
        } else {
            Ok(plain)
        }
    }

    /// Whether a dataset file (plain or compressed) exists.
    pub fn has_dataset(&self, name: &str) -> Result<bool> {
        Ok(self.dataset_path(name)?.exists())
    }

    /// Load and parse a dataset (handles `.gz` transparently).
    pub fn load_json<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let path = self.dataset_path(name)?;
        if !path.exists() {
            return Err(DineMetricsError::NotFound(format!(
                "Dataset {} not found in {}",
                name,
                self.data_dir.display()
            )));
        }

        let contents = read_text(&path)?;
        serde_json::from_str(&contents).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "failed to parse dataset");
            DineMetricsError::MalformedCatalog(format!(
                "Dataset file '{}' could not be parsed: {}",
                path.file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("unknown"),
                e
            ))
        })
    }

    /// Load and validate the restaurant catalog.
    pub fn load_restaurants(&self) -> Result<Vec<Restaurant>> {
        let restaurants: Vec<Restaurant> = self.load_json("restaurants")?;
        validate_restaurants(&restaurants)?;
        tracing::info!(restaurants = restaurants.len(), "loaded restaurant catalog");
        Ok(restaurants)
    }

    /// Load and validate the month buckets.
    pub fn load_months(&self) -> Result<Vec<MonthBucket>> {
        let months: Vec<MonthBucket> = self.load_json("months")?;
        validate_months(&months)?;
        tracing::info!(months = months.len(), "loaded sales ledger");
        Ok(months)
    }

    /// Load the competitor display names, or an empty table if absent.
    pub fn load_display_names(&self) -> Result<DisplayNames> {
        if !self.has_dataset("display_names")? {
            return Ok(DisplayNames::default());
        }
        self.load_json("display_names")
    }

    /// Load the per-month highlight tables, or none if absent.
    pub fn load_highlights(&self) -> Result<Vec<PeriodHighlights>> {
        if !self.has_dataset("highlights")? {
            return Ok(Vec::new());
        }
        self.load_json("highlights")
    }
}

fn read_text(path: &Path) -> Result<String> {
    let mut contents = String::new();
    if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        let file = fs::File::open(path)?;
        let decoder = GzDecoder::new(BufReader::new(file));
        BufReader::new(decoder).read_to_string(&mut contents)?;
    } else {
        contents = fs::read_to_string(path)?;
    }
    Ok(contents)
}

// ---------------------------------------------------------------------------
// Integrity checks
// ---------------------------------------------------------------------------

/// Check the catalog invariants: unique restaurant names, unique product
/// names per restaurant (case-insensitive), valid prices, and a full price
/// history for every listed platform.
pub fn validate_restaurants(restaurants: &[Restaurant]) -> Result<()> {
    let mut names = HashSet::new();
    for restaurant in restaurants {
        if !names.insert(restaurant.name.as_str()) {
            return Err(malformed_catalog(format!(
                "duplicate restaurant '{}'",
                restaurant.name
            )));
        }

        let mut products = HashSet::new();
        for product in &restaurant.products {
            if !products.insert(product.name.to_lowercase()) {
                return Err(malformed_catalog(format!(
                    "restaurant '{}' lists '{}' more than once",
                    restaurant.name, product.name
                )));
            }

            for platform in Platform::ALL {
                let context = || format!("'{}' / '{}' on {}", restaurant.name, product.name, platform);
                match product.listing(platform) {
                    Some(listing) => {
                        if !listing.price.is_finite() || listing.price < 0.0 {
                            return Err(malformed_catalog(format!(
                                "{} has invalid price {}",
                                context(),
                                listing.price
                            )));
                        }
                        if !listing.rating.is_finite() {
                            return Err(malformed_catalog(format!("{} has invalid rating", context())));
                        }
                        if listing.history.len() != config::HISTORY_DAYS {
                            return Err(malformed_catalog(format!(
                                "{} has {} days of price history, expected {}",
                                context(),
                                listing.history.len(),
                                config::HISTORY_DAYS
                            )));
                        }
                        if listing.history.iter().any(|p| !p.is_finite() || *p < 0.0) {
                            return Err(malformed_catalog(format!(
                                "{} has an invalid historical price",
                                context()
                            )));
                        }
                    }
                    None => {
                        let history = match platform {
                            Platform::Zomato => &product.zomato_history,
                            Platform::Swiggy => &product.swiggy_history,
                        };
                        if !history.is_empty() {
                            return Err(malformed_catalog(format!(
                                "{} has price history but no current listing",
                                context()
                            )));
                        }
                    }
                }
            }
        }
    }
    Ok(())
}

/// Check every month bucket and that month keys are unique (case-insensitive).
pub fn validate_months(months: &[MonthBucket]) -> Result<()> {
    let mut keys = HashSet::new();
    for month in months {
        if !keys.insert(month.name.trim().to_lowercase()) {
            return Err(DineMetricsError::MalformedPeriod(format!(
                "duplicate month '{}'",
                month.name
            )));
        }
        validate_month(month)?;
    }
    Ok(())
}

/// Check one month bucket: days start at 1 or later and increase by exactly
/// one, and every amount is finite and non-negative.
pub fn validate_month(month: &MonthBucket) -> Result<()> {
    let mut previous: Option<&DailySalesRecord> = None;
    for record in &month.sales {
        if record.day == 0 {
            return Err(malformed_period(month, "day numbers are 1-based".to_string()));
        }
        if let Some(prev) = previous {
            if prev.day.checked_add(1) != Some(record.day) {
                return Err(malformed_period(
                    month,
                    format!("day {} follows day {}", record.day, prev.day),
                ));
            }
        }
        if !record.amount.is_finite() || record.amount < 0.0 {
            return Err(malformed_period(
                month,
                format!("day {} has invalid amount {}", record.day, record.amount),
            ));
        }
        previous = Some(record);
    }
    Ok(())
}

fn malformed_catalog(detail: String) -> DineMetricsError {
    tracing::warn!(%detail, "restaurant catalog failed validation");
    DineMetricsError::MalformedCatalog(detail)
}

fn malformed_period(month: &MonthBucket, detail: String) -> DineMetricsError {
    tracing::warn!(month = %month.name, %detail, "month failed validation");
    DineMetricsError::MalformedPeriod(format!("{}: {}", month.name, detail))
}
