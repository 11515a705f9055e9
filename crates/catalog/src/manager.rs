use std::sync::Arc;

use serde::{Deserialize, Serialize};

use medfast_core::{DomainError, DomainResult, ItemId};

use crate::item::CatalogItem;
use crate::store::CatalogStore;

/// Stock assigned to newly created items when the administrator leaves the
/// field blank.
pub const DEFAULT_STOCK: u64 = 100;

/// Items below this stock level count as "low stock" on the shop dashboard.
pub const LOW_STOCK_THRESHOLD: u64 = 10;

/// Fields for creating a catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    pub pack_size: String,
    pub manufacturer: Option<String>,
    pub unit_price: u64,
    pub discount_percent: u8,
    /// Defaults to [`DEFAULT_STOCK`] when absent.
    pub stock_quantity: Option<u64>,
}

/// Partial update merged onto an existing item. The id is immutable, and
/// `available` is deliberately absent: arbitrary field edits never nudge the
/// availability flag, only [`InventoryManager::toggle_availability`] and the
/// delivery deduction do.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub pack_size: Option<String>,
    pub manufacturer: Option<String>,
    pub unit_price: Option<u64>,
    pub discount_percent: Option<u8>,
    pub stock_quantity: Option<u64>,
}

/// Dashboard read model over the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockReport {
    pub total_items: usize,
    pub low_stock: usize,
    pub unavailable: usize,
}

/// Administrative mutation surface over the catalog store.
#[derive(Clone)]
pub struct InventoryManager {
    store: Arc<dyn CatalogStore>,
}

impl InventoryManager {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Create a catalog item with a fresh id.
    ///
    /// New items start available; stock defaults to [`DEFAULT_STOCK`].
    pub fn create_item(&self, fields: NewItem) -> DomainResult<CatalogItem> {
        if fields.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        validate_discount(fields.discount_percent)?;

        let item = CatalogItem {
            id: ItemId::new(),
            name: fields.name,
            category: fields.category,
            pack_size: fields.pack_size,
            manufacturer: fields.manufacturer,
            unit_price: fields.unit_price,
            discount_percent: fields.discount_percent,
            stock_quantity: fields.stock_quantity.unwrap_or(DEFAULT_STOCK),
            available: true,
        };
        self.store.put(item.clone())?;
        tracing::info!(item_id = %item.id, name = %item.name, "catalog item created");
        Ok(item)
    }

    /// Merge a partial update onto an existing item.
    pub fn update_item(&self, id: &ItemId, patch: ItemPatch) -> DomainResult<CatalogItem> {
        let mut item = self.store.get(id)?.ok_or(DomainError::ItemNotFound)?;

        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err(DomainError::validation("name cannot be empty"));
            }
            item.name = name;
        }
        if let Some(category) = patch.category {
            item.category = category;
        }
        if let Some(pack_size) = patch.pack_size {
            item.pack_size = pack_size;
        }
        if let Some(manufacturer) = patch.manufacturer {
            item.manufacturer = Some(manufacturer);
        }
        if let Some(unit_price) = patch.unit_price {
            item.unit_price = unit_price;
        }
        if let Some(discount) = patch.discount_percent {
            validate_discount(discount)?;
            item.discount_percent = discount;
        }
        if let Some(stock) = patch.stock_quantity {
            // No availability nudge here: stock 0 with available = true means
            // "temporarily out, restocking soon".
            item.stock_quantity = stock;
        }

        self.store.put(item.clone())?;
        tracing::debug!(item_id = %item.id, "catalog item updated");
        Ok(item)
    }

    /// Flip `available` without touching `stock_quantity`.
    pub fn toggle_availability(&self, id: &ItemId) -> DomainResult<CatalogItem> {
        let mut item = self.store.get(id)?.ok_or(DomainError::ItemNotFound)?;
        item.toggle_availability();
        self.store.put(item.clone())?;
        tracing::info!(item_id = %item.id, available = item.available, "availability toggled");
        Ok(item)
    }

    /// Low-stock / unavailable counts for the shop dashboard.
    pub fn stock_report(&self) -> DomainResult<StockReport> {
        let items = self.store.list()?;
        Ok(StockReport {
            total_items: items.len(),
            low_stock: items
                .iter()
                .filter(|i| i.stock_quantity < LOW_STOCK_THRESHOLD)
                .count(),
            unavailable: items.iter().filter(|i| !i.available).count(),
        })
    }
}

fn validate_discount(discount_percent: u8) -> DomainResult<()> {
    if discount_percent > 100 {
        return Err(DomainError::validation(
            "discount_percent must be in 0..=100",
        ));
    }
    Ok(())
}
