use serde::{Deserialize, Serialize};

use super::restaurant::{Platform, Segment};

// ---------------------------------------------------------------------------
// EntrySource — Which list an entry was ranked for
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum EntrySource {
    Segment(Segment),
    Platform(Platform),
}

// ---------------------------------------------------------------------------
// RankedEntry — One row of a ranked list (query result)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RankedEntry {
    /// Canonical restaurant name.
    pub name: String,
    pub rating: f64,
    pub price: f64,
    pub discount: String,
    pub segment: Segment,
    pub source: EntrySource,
}

// ---------------------------------------------------------------------------
// SearchResults — The three ranked lists for one product query
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchResults {
    pub competitors: Vec<RankedEntry>,
    pub zomato: Vec<RankedEntry>,
    pub swiggy: Vec<RankedEntry>,
}

impl SearchResults {
    /// The ranked list for one platform.
    pub fn platform(&self, platform: Platform) -> &[RankedEntry] {
        match platform {
            Platform::Zomato => &self.zomato,
            Platform::Swiggy => &self.swiggy,
        }
    }

    /// True when the product matched no restaurant at all.
    pub fn is_empty(&self) -> bool {
        self.competitors.is_empty() && self.zomato.is_empty() && self.swiggy.is_empty()
    }
}
