use serde::{Deserialize, Serialize};

use medfast_catalog::CatalogItem;
use medfast_core::{DomainError, DomainResult, Features, ItemId};

use crate::pricing::line_total;

/// One cart line: a catalog item reference plus the price snapshot taken when
/// the line was first added. Later catalog edits do not reach into the line.
///
/// # Invariants
/// - `quantity` is never stored as zero; a decrement to zero removes the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: ItemId,
    /// Display name, snapshotted for receipts and assistant context.
    pub name: String,
    /// Price in smallest currency unit, frozen at add time.
    pub unit_price: u64,
    /// Discount in `0..=100`, frozen at add time.
    pub discount_percent: u8,
    pub quantity: u32,
}

impl CartLine {
    /// Discounted total for this line, rounded to the smallest currency unit.
    pub fn total(&self) -> u64 {
        line_total(self.unit_price, self.discount_percent, self.quantity)
    }
}

/// A transient, per-customer aggregation of requested items prior to checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines (not total units).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Add `quantity` units of a catalog item.
    ///
    /// A repeat add of the same item increments the existing line and keeps
    /// its original price snapshot; a first add freezes `unit_price` and
    /// `discount_percent` from the live item. Rejected with `ServiceDisabled`
    /// when pharmacy ordering is paused, leaving the cart unmodified.
    pub fn add_item(
        &mut self,
        features: &Features,
        item: &CatalogItem,
        quantity: u32,
    ) -> DomainResult<()> {
        features.ensure_pharmacy()?;
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item.id) {
            line.quantity = line.quantity.saturating_add(quantity);
            return Ok(());
        }

        self.lines.push(CartLine {
            item_id: item.id,
            name: item.name.clone(),
            unit_price: item.unit_price,
            discount_percent: item.discount_percent,
            quantity,
        });
        Ok(())
    }

    /// Set a line's quantity directly. Zero removes the line; setting a
    /// positive quantity on an item that is not in the cart fails with
    /// `ItemNotFound` (quantity edits are not adds).
    pub fn set_quantity(&mut self, item_id: &ItemId, quantity: u32) -> DomainResult<()> {
        if quantity == 0 {
            self.lines.retain(|l| l.item_id != *item_id);
            return Ok(());
        }

        let line = self
            .lines
            .iter_mut()
            .find(|l| l.item_id == *item_id)
            .ok_or(DomainError::ItemNotFound)?;
        line.quantity = quantity;
        Ok(())
    }

    /// Cart total from the frozen snapshots, never the live catalog. Each
    /// line is rounded before summing.
    pub fn total(&self) -> u64 {
        self.lines.iter().map(CartLine::total).sum()
    }

    /// Empty the cart (checkout completion, logout).
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Drain the lines out of the cart, leaving it empty. Used by checkout to
    /// move the snapshots onto the order.
    pub fn take_lines(&mut self) -> Vec<CartLine> {
        std::mem::take(&mut self.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_item(price: u64, discount: u8) -> CatalogItem {
        CatalogItem {
            id: ItemId::new(),
            name: "Cetirizine 10mg".to_string(),
            category: "Allergy".to_string(),
            pack_size: "10 Tablets / Strip".to_string(),
            manufacturer: None,
            unit_price: price,
            discount_percent: discount,
            stock_quantity: 50,
            available: true,
        }
    }

    #[test]
    fn first_add_snapshots_price_and_discount() {
        let mut cart = Cart::new();
        let item = catalog_item(1200, 10);
        cart.add_item(&Features::default(), &item, 2).unwrap();

        let line = &cart.lines()[0];
        assert_eq!(line.unit_price, 1200);
        assert_eq!(line.discount_percent, 10);
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn repeat_add_increments_and_keeps_original_snapshot() {
        let mut cart = Cart::new();
        let mut item = catalog_item(1200, 10);
        cart.add_item(&Features::default(), &item, 1).unwrap();

        // Catalog edit after the first add must not leak into the line.
        item.unit_price = 9999;
        item.discount_percent = 0;
        cart.add_item(&Features::default(), &item, 2).unwrap();

        assert_eq!(cart.len(), 1);
        let line = &cart.lines()[0];
        assert_eq!(line.quantity, 3);
        assert_eq!(line.unit_price, 1200);
        assert_eq!(line.discount_percent, 10);
    }

    #[test]
    fn add_with_pharmacy_disabled_leaves_cart_untouched() {
        let mut cart = Cart::new();
        cart.add_item(&Features::default(), &catalog_item(500, 0), 1)
            .unwrap();
        let before = cart.clone();

        let disabled = Features {
            pharmacy_enabled: false,
            ..Features::default()
        };
        let err = cart
            .add_item(&disabled, &catalog_item(700, 0), 1)
            .unwrap_err();

        assert!(matches!(err, DomainError::ServiceDisabled(_)));
        assert_eq!(cart, before);
    }

    #[test]
    fn zero_quantity_add_is_rejected() {
        let mut cart = Cart::new();
        let err = cart
            .add_item(&Features::default(), &catalog_item(500, 0), 0)
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_zero_removes_the_line() {
        let mut cart = Cart::new();
        let item = catalog_item(500, 0);
        cart.add_item(&Features::default(), &item, 4).unwrap();

        cart.set_quantity(&item.id, 0).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_sets_directly_not_incrementally() {
        let mut cart = Cart::new();
        let item = catalog_item(500, 0);
        cart.add_item(&Features::default(), &item, 4).unwrap();

        cart.set_quantity(&item.id, 2).unwrap();
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn set_quantity_on_missing_line_is_item_not_found() {
        let mut cart = Cart::new();
        let err = cart.set_quantity(&ItemId::new(), 3).unwrap_err();
        assert_eq!(err, DomainError::ItemNotFound);
    }

    #[test]
    fn total_uses_frozen_snapshots() {
        let mut cart = Cart::new();
        cart.add_item(&Features::default(), &catalog_item(1000, 25), 2)
            .unwrap();
        cart.add_item(&Features::default(), &catalog_item(299, 0), 3)
            .unwrap();
        // 2 * 750 + 3 * 299
        assert_eq!(cart.total(), 1500 + 897);
    }

    #[test]
    fn take_lines_empties_the_cart() {
        let mut cart = Cart::new();
        cart.add_item(&Features::default(), &catalog_item(500, 0), 1)
            .unwrap();
        let lines = cart.take_lines();
        assert_eq!(lines.len(), 1);
        assert!(cart.is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: the cart total is the sum of independently rounded
            /// line totals, for carts of 1-50 lines with quantities in 1..=99.
            #[test]
            fn total_is_sum_of_line_totals(
                entries in prop::collection::vec((0u64..100_000, 0u8..=100, 1u32..=99), 1..=50)
            ) {
                let mut cart = Cart::new();
                let features = Features::default();
                for (price, discount, qty) in &entries {
                    cart.add_item(&features, &catalog_item(*price, *discount), *qty).unwrap();
                }

                let expected: u64 = cart.lines().iter().map(CartLine::total).sum();
                prop_assert_eq!(cart.total(), expected);
            }
        }
    }
}
