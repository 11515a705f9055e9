use serde::{Deserialize, Serialize};

use medfast_core::{Entity, ItemId};

/// A sellable catalog item.
///
/// # Invariants
/// - `discount_percent` is in `0..=100` (enforced at the manager boundary).
/// - `available` is an explicit flag, stored independently of
///   `stock_quantity`. An administrator may legitimately hold stock at 0 while
///   keeping the item available ("restocking soon"), or pull an item without
///   zeroing its stock. Only the delivery deduction and the explicit toggle
///   move the flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    /// Retail unit, e.g. "10 Tablets / Strip".
    pub pack_size: String,
    pub manufacturer: Option<String>,
    /// Price in smallest currency unit (e.g., cents).
    pub unit_price: u64,
    /// Percentage discount in `0..=100`.
    pub discount_percent: u8,
    pub stock_quantity: u64,
    pub available: bool,
}

impl CatalogItem {
    /// Deduct delivered quantity from stock, clamping at zero, and nudge
    /// `available` back toward consistency with the new stock level.
    ///
    /// Clamping tolerates a catalog that was edited downward between checkout
    /// and delivery; over-delivery is a recoverable condition, not an error.
    pub fn deduct_stock(&mut self, quantity: u64) {
        self.stock_quantity = self.stock_quantity.saturating_sub(quantity);
        self.available = self.stock_quantity > 0;
    }

    /// Flip the availability flag without touching stock.
    pub fn toggle_availability(&mut self) {
        self.available = !self.available;
    }
}

impl Entity for CatalogItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
