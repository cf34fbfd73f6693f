use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TopProduct / TopCategory — Best sellers for a period
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
    pub name: String,
    /// Share of period sales, in percent.
    pub share_pct: f64,
    pub units_sold: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCategory {
    pub name: String,
    pub share_pct: f64,
}

// ---------------------------------------------------------------------------
// PeriodHighlights — Static best-seller tables for one month
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodHighlights {
    pub month: String,
    #[serde(default)]
    pub top_products: Vec<TopProduct>,
    #[serde(default)]
    pub top_categories: Vec<TopCategory>,
}
