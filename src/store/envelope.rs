use crate::item::{Item, SortOrder};
use serde::{Deserialize, Serialize};

/// Fixed identifier the durable record is keyed by; the on-disk file is
/// `{STORAGE_KEY}.json`.
pub const STORAGE_KEY: &str = "item-storage";

/// Schema version written into every envelope.
pub const ENVELOPE_VERSION: u32 = 0;

/// The serialized record written to durable storage. Only the items and
/// the sort order are persisted; view state and the session load latch
/// never reach disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub state: PersistedState,
    pub version: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default, rename = "sortOrder")]
    pub sort_order: SortOrder,
}

impl Envelope {
    pub fn new(items: Vec<Item>, sort_order: SortOrder) -> Self {
        Self {
            state: PersistedState { items, sort_order },
            version: ENVELOPE_VERSION,
        }
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::new(Vec::new(), SortOrder::default())
    }
}
