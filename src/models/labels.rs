use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::ranking::RankedEntry;

// ---------------------------------------------------------------------------
// DisplayNames — Presentation aliases for competitor restaurants
// ---------------------------------------------------------------------------

/// Maps canonical restaurant names to the labels shown in the competitors
/// column. Ranking always returns canonical names; callers relabel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayNames {
    aliases: HashMap<String, String>,
}

impl DisplayNames {
    pub fn new(aliases: HashMap<String, String>) -> Self {
        Self { aliases }
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// The alias for `name`, or `name` itself when none is configured.
    pub fn label_for<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.get(name).map(String::as_str).unwrap_or(name)
    }

    /// Copy `entries` with every name replaced by its label.
    pub fn relabel(&self, entries: &[RankedEntry]) -> Vec<RankedEntry> {
        entries
            .iter()
            .map(|e| RankedEntry {
                name: self.label_for(&e.name).to_string(),
                ..e.clone()
            })
            .collect()
    }
}

impl FromIterator<(String, String)> for DisplayNames {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            aliases: iter.into_iter().collect(),
        }
    }
}
