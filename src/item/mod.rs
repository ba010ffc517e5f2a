pub mod entry;
pub mod sort;

pub use entry::Item;
pub use sort::{sort_items, SortOrder};
