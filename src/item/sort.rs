use super::Item;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Global ordering of items by creation timestamp. Owned by the store and
/// persisted alongside the items; views only mirror it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Ascending,
    #[default]
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "asc"),
            SortOrder::Descending => write!(f, "desc"),
        }
    }
}

/// Sort items by creation timestamp in place. The sort is stable, so items
/// with equal timestamps keep their insertion order.
pub fn sort_items(items: &mut [Item], order: SortOrder) {
    match order {
        SortOrder::Ascending => items.sort_by(|a, b| a.created_date.cmp(&b.created_date)),
        SortOrder::Descending => items.sort_by(|a, b| b.created_date.cmp(&a.created_date)),
    }
}
