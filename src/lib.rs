pub mod config;
pub mod item;
pub mod pagination;
pub mod store;
pub mod utils;
