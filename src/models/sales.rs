use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DailySalesRecord — One day of the sales ledger
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailySalesRecord {
    pub day: u32,
    pub amount: f64,
    #[serde(rename = "no_of_orders")]
    pub orders: u64,
}

impl DailySalesRecord {
    pub fn new(day: u32, amount: f64, orders: u64) -> Self {
        Self { day, amount, orders }
    }
}

// ---------------------------------------------------------------------------
// MonthBucket — Named period with its ordered daily records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthBucket {
    #[serde(rename = "month")]
    pub name: String,
    #[serde(default)]
    pub sales: Vec<DailySalesRecord>,
}

impl MonthBucket {
    pub fn new(name: impl Into<String>, sales: Vec<DailySalesRecord>) -> Self {
        Self {
            name: name.into(),
            sales,
        }
    }

    /// Whether this bucket is addressed by `key` (case-insensitive).
    pub fn is_named(&self, key: &str) -> bool {
        self.name.trim().to_lowercase() == key.trim().to_lowercase()
    }
}

// ---------------------------------------------------------------------------
// SalesSummary — Period totals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SalesSummary {
    pub total_sales: f64,
    pub total_orders: u64,
    /// Rounded to the nearest whole unit; zero when there were no orders.
    pub average_order_value: f64,
}

// ---------------------------------------------------------------------------
// WeekComparison — Trailing week against the week before it
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct WeekComparison {
    pub current_week: Vec<f64>,
    pub previous_week: Vec<f64>,
    pub current_days: Vec<u32>,
    pub previous_days: Vec<u32>,
}

impl WeekComparison {
    pub fn current_total(&self) -> f64 {
        self.current_week.iter().sum()
    }

    pub fn previous_total(&self) -> f64 {
        self.previous_week.iter().sum()
    }

    /// Relative change of the current week over the previous one, in percent.
    ///
    /// `None` when the previous week had no sales.
    pub fn change_pct(&self) -> Option<f64> {
        let previous = self.previous_total();
        if previous > 0.0 {
            Some((self.current_total() - previous) / previous * 100.0)
        } else {
            None
        }
    }
}
