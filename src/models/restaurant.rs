use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DineMetricsError;

// ---------------------------------------------------------------------------
// Segment — Market segment a restaurant competes in
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    Premium,
    #[serde(rename = "Mid-tier")]
    MidTier,
    Budget,
}

impl Segment {
    pub const ALL: [Segment; 3] = [Segment::Premium, Segment::MidTier, Segment::Budget];

    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::Premium => "Premium",
            Segment::MidTier => "Mid-tier",
            Segment::Budget => "Budget",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Segment {
    type Err = DineMetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "premium" => Ok(Segment::Premium),
            "mid-tier" | "midtier" | "mid tier" => Ok(Segment::MidTier),
            "budget" => Ok(Segment::Budget),
            other => Err(DineMetricsError::InvalidArgument(format!(
                "Unknown segment: '{}' (expected Premium, Mid-tier or Budget)",
                other
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Platform — Delivery platform a product is listed on
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Zomato,
    Swiggy,
}

impl Platform {
    /// Both platforms, in the order results are presented.
    pub const ALL: [Platform; 2] = [Platform::Zomato, Platform::Swiggy];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Zomato => "Zomato",
            Platform::Swiggy => "Swiggy",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = DineMetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zomato" => Ok(Platform::Zomato),
            "swiggy" => Ok(Platform::Swiggy),
            other => Err(DineMetricsError::InvalidArgument(format!(
                "Unknown platform: '{}'",
                other
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Product — One menu item with its per-platform listings
// ---------------------------------------------------------------------------

/// A menu item as it appears in `analysis.json`.
///
/// Each platform's fields are stored flat, mirroring the dataset. A platform
/// counts as listed only when both its price and rating are present; use
/// [`Product::listing`] rather than reading the fields directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "Product")]
    pub name: String,
    #[serde(rename = "todayPriceZomato", default, skip_serializing_if = "Option::is_none")]
    pub zomato_price: Option<f64>,
    #[serde(rename = "todayPriceSwiggy", default, skip_serializing_if = "Option::is_none")]
    pub swiggy_price: Option<f64>,
    #[serde(rename = "ZomatoRating", default, skip_serializing_if = "Option::is_none")]
    pub zomato_rating: Option<f64>,
    #[serde(rename = "SwiggyRating", default, skip_serializing_if = "Option::is_none")]
    pub swiggy_rating: Option<f64>,
    #[serde(rename = "ZomatoDiscount", default)]
    pub zomato_discount: String,
    #[serde(rename = "SwiggyDiscount", default)]
    pub swiggy_discount: String,
    #[serde(rename = "past30DaysZomato", default)]
    pub zomato_history: Vec<f64>,
    #[serde(rename = "past30DaysSwiggy", default)]
    pub swiggy_history: Vec<f64>,
}

/// Borrowed view of a product's listing on one platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformListing<'a> {
    pub platform: Platform,
    pub price: f64,
    pub rating: f64,
    pub discount: &'a str,
    /// Daily prices, oldest first (day 1 at index 0).
    pub history: &'a [f64],
}

impl Product {
    /// Create a product with no platform listings.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            zomato_price: None,
            swiggy_price: None,
            zomato_rating: None,
            swiggy_rating: None,
            zomato_discount: String::new(),
            swiggy_discount: String::new(),
            zomato_history: Vec::new(),
            swiggy_history: Vec::new(),
        }
    }

    /// Set the listing for one platform, replacing any previous one.
    pub fn with_listing(
        mut self,
        platform: Platform,
        price: f64,
        rating: f64,
        discount: impl Into<String>,
        history: Vec<f64>,
    ) -> Self {
        let discount = discount.into();
        match platform {
            Platform::Zomato => {
                self.zomato_price = Some(price);
                self.zomato_rating = Some(rating);
                self.zomato_discount = discount;
                self.zomato_history = history;
            }
            Platform::Swiggy => {
                self.swiggy_price = Some(price);
                self.swiggy_rating = Some(rating);
                self.swiggy_discount = discount;
                self.swiggy_history = history;
            }
        }
        self
    }

    /// The product's listing on `platform`, or `None` if it is not sold there.
    pub fn listing(&self, platform: Platform) -> Option<PlatformListing<'_>> {
        let (price, rating, discount, history) = match platform {
            Platform::Zomato => (
                self.zomato_price,
                self.zomato_rating,
                &self.zomato_discount,
                &self.zomato_history,
            ),
            Platform::Swiggy => (
                self.swiggy_price,
                self.swiggy_rating,
                &self.swiggy_discount,
                &self.swiggy_history,
            ),
        };
        Some(PlatformListing {
            platform,
            price: price?,
            rating: rating?,
            discount: discount.as_str(),
            history: history.as_slice(),
        })
    }

    /// Case-insensitive name comparison against an already folded query key.
    /// The stored name is not trimmed.
    pub(crate) fn matches_key(&self, key: &str) -> bool {
        self.name.to_lowercase() == key
    }
}

// ---------------------------------------------------------------------------
// Restaurant — Catalog entry with its segment and menu
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    #[serde(rename = "type")]
    pub segment: Segment,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Restaurant {
    pub fn new(name: impl Into<String>, segment: Segment, products: Vec<Product>) -> Self {
        Self {
            name: name.into(),
            segment,
            products,
        }
    }

    /// Find a product by name, ignoring case and surrounding whitespace.
    pub fn product(&self, name: &str) -> Option<&Product> {
        self.product_by_key(&fold_name(name))
    }

    pub(crate) fn product_by_key(&self, key: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.matches_key(key))
    }
}

/// Normalize a user-supplied product query for lookup.
pub(crate) fn fold_name(name: &str) -> String {
    name.trim().to_lowercase()
}
