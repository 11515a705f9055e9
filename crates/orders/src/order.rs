use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use medfast_cart::{Cart, CartLine};
use medfast_core::{AccountId, DomainError, DomainResult, Entity, Features, ItemId, OrderId};

use crate::status::OrderStatus;

/// One line of an order: the cart snapshot carried over verbatim at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub item_id: ItemId,
    pub name: String,
    /// Price in smallest currency unit, frozen at add-to-cart time.
    pub unit_price: u64,
    pub discount_percent: u8,
    pub quantity: u32,
}

impl From<CartLine> for OrderLine {
    fn from(line: CartLine) -> Self {
        Self {
            item_id: line.item_id,
            name: line.name,
            unit_price: line.unit_price,
            discount_percent: line.discount_percent,
            quantity: line.quantity,
        }
    }
}

/// Inputs to checkout beyond the cart itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub customer_id: AccountId,
    /// Fulfilling store, when already assigned.
    pub store_id: Option<AccountId>,
    /// Whether this order originates from an uploaded prescription. Explicit
    /// input, never inferred: it routes the order through `Reviewing`.
    pub prescription: bool,
    pub now: DateTime<Utc>,
}

/// An immutable-snapshot record of a completed checkout, tracked through the
/// fixed delivery lifecycle.
///
/// Lines and `total_amount` are computed once at checkout and never
/// recomputed; only `status` moves afterwards, and terminal orders are
/// retained for history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_id: AccountId,
    store_id: Option<AccountId>,
    lines: Vec<OrderLine>,
    total_amount: u64,
    status: OrderStatus,
    prescription: bool,
    created_at: DateTime<Utc>,
}

impl Order {
    pub fn customer_id(&self) -> AccountId {
        self.customer_id
    }

    pub fn store_id(&self) -> Option<AccountId> {
        self.store_id
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn total_amount(&self) -> u64 {
        self.total_amount
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn is_prescription(&self) -> bool {
        self.prescription
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Turn a non-empty cart into an order snapshot, clearing the cart.
///
/// The total is computed from the frozen cart snapshots immediately before
/// the lines move over, so it always equals `cart.total()` taken just prior.
/// Initial status is `Preparing`, or `Reviewing` for prescription-derived
/// checkouts. The catalog is not touched here; stock moves only on delivery.
pub fn checkout(
    features: &Features,
    cart: &mut Cart,
    request: CheckoutRequest,
) -> DomainResult<Order> {
    features.ensure_pharmacy()?;
    if cart.is_empty() {
        return Err(DomainError::validation("cannot check out an empty cart"));
    }

    let total_amount = cart.total();
    let lines: Vec<OrderLine> = cart.take_lines().into_iter().map(OrderLine::from).collect();
    let status = if request.prescription {
        OrderStatus::Reviewing
    } else {
        OrderStatus::Preparing
    };

    let order = Order {
        id: OrderId::new(),
        customer_id: request.customer_id,
        store_id: request.store_id,
        lines,
        total_amount,
        status,
        prescription: request.prescription,
        created_at: request.now,
    };
    tracing::info!(
        order_id = %order.id,
        total = order.total_amount,
        status = %order.status,
        "order created from checkout"
    );
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use medfast_catalog::CatalogItem;

    fn catalog_item(price: u64, discount: u8) -> CatalogItem {
        CatalogItem {
            id: ItemId::new(),
            name: "Amoxicillin 500mg".to_string(),
            category: "Antibiotic".to_string(),
            pack_size: "10 Capsules / Strip".to_string(),
            manufacturer: None,
            unit_price: price,
            discount_percent: discount,
            stock_quantity: 25,
            available: true,
        }
    }

    fn request(prescription: bool) -> CheckoutRequest {
        CheckoutRequest {
            customer_id: AccountId::new(),
            store_id: None,
            prescription,
            now: Utc::now(),
        }
    }

    #[test]
    fn checkout_freezes_total_and_clears_cart() {
        let features = Features::default();
        let mut cart = Cart::new();
        cart.add_item(&features, &catalog_item(1000, 25), 2).unwrap();
        cart.add_item(&features, &catalog_item(299, 0), 3).unwrap();

        let expected_total = cart.total();
        let order = checkout(&features, &mut cart, request(false)).unwrap();

        assert_eq!(order.total_amount(), expected_total);
        assert_eq!(order.lines().len(), 2);
        assert_eq!(order.status(), OrderStatus::Preparing);
        assert!(cart.is_empty());
    }

    #[test]
    fn prescription_checkout_starts_in_reviewing() {
        let features = Features::default();
        let mut cart = Cart::new();
        cart.add_item(&features, &catalog_item(500, 0), 1).unwrap();

        let order = checkout(&features, &mut cart, request(true)).unwrap();
        assert_eq!(order.status(), OrderStatus::Reviewing);
        assert!(order.is_prescription());
    }

    #[test]
    fn empty_cart_cannot_check_out() {
        let features = Features::default();
        let mut cart = Cart::new();
        let err = checkout(&features, &mut cart, request(false)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn disabled_pharmacy_blocks_checkout_and_keeps_the_cart() {
        let features = Features::default();
        let mut cart = Cart::new();
        cart.add_item(&features, &catalog_item(500, 0), 1).unwrap();

        let err = checkout(&Features::all_disabled(), &mut cart, request(false)).unwrap_err();
        assert!(matches!(err, DomainError::ServiceDisabled(_)));
        assert_eq!(cart.len(), 1);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: the order total equals the cart total computed
            /// immediately before checkout, for 1-50 lines and quantities
            /// in 1..=99.
            #[test]
            fn order_total_round_trips_cart_total(
                entries in prop::collection::vec((0u64..100_000, 0u8..=100, 1u32..=99), 1..=50)
            ) {
                let features = Features::default();
                let mut cart = Cart::new();
                for (price, discount, qty) in &entries {
                    cart.add_item(&features, &catalog_item(*price, *discount), *qty).unwrap();
                }

                let total_before = cart.total();
                let order = checkout(&features, &mut cart, request(false)).unwrap();
                prop_assert_eq!(order.total_amount(), total_before);
                prop_assert!(cart.is_empty());
            }
        }
    }
}
