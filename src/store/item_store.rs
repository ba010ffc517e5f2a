use super::envelope::Envelope;
use crate::item::{sort_items, Item, SortOrder};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Authoritative item collection plus the global sort order, backed by a
/// JSON envelope on disk.
///
/// The collection is re-sorted on every mutation, so `all_items` never
/// observes an unsorted intermediate state. Storage failures are absorbed:
/// a failed read starts the session empty, a failed write leaves the
/// in-memory state authoritative and logs a warning.
pub struct ItemStore {
    items: Vec<Item>,
    sort_order: SortOrder,
    has_initially_loaded: bool,
    storage_path: Option<PathBuf>,
}

impl ItemStore {
    /// Open the store backed by `path`, rehydrating from the envelope if
    /// one is readable. A missing, unreadable, or corrupt envelope yields
    /// empty initial state; it is never an error.
    pub fn open(path: PathBuf) -> Self {
        let envelope = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Envelope>(&content) {
                Ok(envelope) => envelope,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "corrupt storage envelope, starting empty");
                    Envelope::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Envelope::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read storage, starting empty");
                Envelope::default()
            }
        };

        let mut items = envelope.state.items;
        let sort_order = envelope.state.sort_order;
        sort_items(&mut items, sort_order);
        debug!(count = items.len(), %sort_order, "item store opened");

        Self {
            items,
            sort_order,
            has_initially_loaded: false,
            storage_path: Some(path),
        }
    }

    /// A store with no backing file. Used by tests and ephemeral runs;
    /// persistence calls become no-ops.
    pub fn in_memory() -> Self {
        Self {
            items: Vec::new(),
            sort_order: SortOrder::default(),
            has_initially_loaded: false,
            storage_path: None,
        }
    }

    /// Insert an item, re-sort per the current order, persist.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
        sort_items(&mut self.items, self.sort_order);
        self.persist();
    }

    /// The full collection, sorted per the current order.
    pub fn all_items(&self) -> Vec<Item> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Change the global sort order, re-sort immediately, persist.
    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
        sort_items(&mut self.items, order);
        self.persist();
    }

    /// One-shot session latch guarding redundant initial loads. Never
    /// persisted; reset only via [`reset`](Self::reset).
    pub fn has_initially_loaded(&self) -> bool {
        self.has_initially_loaded
    }

    pub fn set_has_initially_loaded(&mut self, loaded: bool) {
        self.has_initially_loaded = loaded;
    }

    /// Full reset: clears the items, returns the sort order to descending,
    /// clears the load latch, and persists the empty envelope.
    pub fn reset(&mut self) {
        self.items.clear();
        self.sort_order = SortOrder::default();
        self.has_initially_loaded = false;
        self.persist();
    }

    /// Write the envelope to disk. Fire-and-forget: failures are logged
    /// and the in-memory state stays authoritative for the session.
    fn persist(&self) {
        let Some(path) = &self.storage_path else {
            return;
        };

        let envelope = Envelope::new(self.items.clone(), self.sort_order);
        let content = match serde_json::to_string_pretty(&envelope) {
            Ok(content) => content,
            Err(e) => {
                warn!(error = %e, "could not serialize storage envelope");
                return;
            }
        };

        if let Some(parent) = path.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warn!(path = %parent.display(), error = %e, "could not create storage directory");
            return;
        }

        if let Err(e) = fs::write(path, content) {
            warn!(path = %path.display(), error = %e, "could not persist items, keeping in-memory state");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn item_at(text: &str, secs: i64) -> Item {
        Item::with_created_date(text, Utc.timestamp_opt(secs, 0).unwrap())
    }

    #[test]
    fn test_open_missing_file_starts_empty() {
        let dir = tempdir().unwrap();
        let store = ItemStore::open(dir.path().join("item-storage.json"));

        assert!(store.is_empty());
        assert_eq!(store.sort_order(), SortOrder::Descending);
        assert!(!store.has_initially_loaded());
    }

    #[test]
    fn test_open_corrupt_file_starts_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("item-storage.json");
        fs::write(&path, "{ not json").unwrap();

        let store = ItemStore::open(path);
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_item_keeps_collection_sorted() {
        let mut store = ItemStore::in_memory();
        store.set_sort_order(SortOrder::Ascending);
        store.add_item(item_at("late", 300));
        store.add_item(item_at("early", 100));
        store.add_item(item_at("middle", 200));

        let texts: Vec<_> = store.all_items().into_iter().map(|i| i.text).collect();
        assert_eq!(texts, vec!["early", "middle", "late"]);
    }

    #[test]
    fn test_set_sort_order_resorts() {
        let mut store = ItemStore::in_memory();
        store.add_item(item_at("a", 100));
        store.add_item(item_at("b", 200));

        assert_eq!(store.all_items()[0].text, "b");
        store.set_sort_order(SortOrder::Ascending);
        assert_eq!(store.all_items()[0].text, "a");
    }

    #[test]
    fn test_persists_and_rehydrates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("item-storage.json");

        let mut store = ItemStore::open(path.clone());
        store.set_sort_order(SortOrder::Ascending);
        store.add_item(item_at("keep me", 12345));
        let stored = store.all_items();
        let original_id = stored[0].id;
        let original_date = stored[0].created_date;

        let reloaded = ItemStore::open(path);
        assert_eq!(reloaded.sort_order(), SortOrder::Ascending);
        let items = reloaded.all_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, original_id);
        assert_eq!(items[0].text, "keep me");
        assert_eq!(items[0].created_date, original_date);
        // latch is session-local, never persisted
        assert!(!reloaded.has_initially_loaded());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut store = ItemStore::in_memory();
        store.add_item(item_at("a", 100));
        store.set_sort_order(SortOrder::Ascending);
        store.set_has_initially_loaded(true);

        store.reset();

        assert!(store.is_empty());
        assert_eq!(store.sort_order(), SortOrder::Descending);
        assert!(!store.has_initially_loaded());
    }

    #[test]
    fn test_reset_persists_empty_envelope() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("item-storage.json");

        let mut store = ItemStore::open(path.clone());
        store.add_item(item_at("gone", 100));
        store.reset();

        let reloaded = ItemStore::open(path);
        assert!(reloaded.is_empty());
    }

    #[test]
    fn test_write_failure_keeps_memory_authoritative() {
        // A directory at the storage path makes every write fail.
        let dir = tempdir().unwrap();
        let path = dir.path().join("item-storage.json");
        fs::create_dir_all(&path).unwrap();

        let mut store = ItemStore::open(path);
        store.add_item(item_at("still here", 100));
        assert_eq!(store.len(), 1);
        assert_eq!(store.all_items()[0].text, "still here");
    }

    #[test]
    fn test_rehydrates_legacy_epoch_millis_timestamps() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("item-storage.json");
        let json = format!(
            r#"{{"state":{{"items":[{{"id":"{}","text":"old","createdDate":"1700000000000"}}],"sortOrder":"desc"}},"version":0}}"#,
            uuid::Uuid::new_v4()
        );
        fs::write(&path, json).unwrap();

        let store = ItemStore::open(path);
        let items = store.all_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].created_date.timestamp_millis(), 1_700_000_000_000);
    }
}
