use std::collections::HashMap;
use std::path::PathBuf;

/// Number of entries kept in every ranked list.
pub const TOP_N: usize = 3;

/// Length of one comparison window in days.
pub const WEEK_LEN: usize = 7;

/// Length of the per-platform price history carried by every listed product.
pub const HISTORY_DAYS: usize = 30;

pub fn dataset_files() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        // Required reference data
        ("restaurants", "analysis.json"),
        ("months", "daily.json"),
        // Optional lookup tables
        ("display_names", "display_names.json"),
        ("highlights", "highlights.json"),
    ])
}

pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("dine-metrics")
    } else {
        PathBuf::from(".dine-metrics-data")
    }
}
