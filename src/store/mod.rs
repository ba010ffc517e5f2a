pub mod envelope;
pub mod item_store;

pub use envelope::{Envelope, STORAGE_KEY};
pub use item_store::ItemStore;
