//! Catalog domain module: sellable items and their authoritative store.
//!
//! This crate holds the current set of sellable items, the store abstraction
//! shared by the order lifecycle and the inventory manager, and the
//! administrative mutation surface (create/edit/toggle availability).

pub mod item;
pub mod manager;
pub mod store;

pub use item::CatalogItem;
pub use manager::{InventoryManager, ItemPatch, NewItem, StockReport, DEFAULT_STOCK, LOW_STOCK_THRESHOLD};
pub use store::{CatalogStore, InMemoryCatalogStore};
