use std::sync::Arc;

use medfast_catalog::CatalogStore;
use medfast_core::{DomainError, DomainResult, Entity, OrderId};

use crate::order::Order;
use crate::status::OrderStatus;
use crate::store::OrderStore;

/// Drives orders through the delivery state machine and commits the stock
/// deduction when an order reaches `Delivered`.
///
/// The catalog is the one resource shared with the inventory manager; the
/// deduction reads and stages every affected item before writing anything, so
/// the item writes and the status flip commit as one logical step under the
/// single-mutator model.
#[derive(Clone)]
pub struct Lifecycle {
    orders: Arc<dyn OrderStore>,
    catalog: Arc<dyn CatalogStore>,
}

impl Lifecycle {
    pub fn new(orders: Arc<dyn OrderStore>, catalog: Arc<dyn CatalogStore>) -> Self {
        Self { orders, catalog }
    }

    /// Advance an order to `target`.
    ///
    /// `target` must be a legal successor of the current status, or
    /// `Cancelled` from any non-terminal state. On `Delivered`, every line's
    /// stock is deducted (clamped at zero) and `available` re-derived; a line
    /// whose catalog item no longer exists is skipped without failing the
    /// delivery. Store failures abort before any write, so the order is never
    /// reported delivered with stock un-deducted.
    pub fn advance(&self, order_id: &OrderId, target: OrderStatus) -> DomainResult<Order> {
        let mut order = self.orders.get(order_id)?.ok_or(DomainError::OrderNotFound)?;

        let from = order.status();
        if from.is_terminal() {
            return Err(DomainError::already_terminal(from));
        }
        if !from.can_advance_to(target) {
            return Err(DomainError::invalid_transition(from, target));
        }

        if target == OrderStatus::Delivered {
            self.deduct_stock(&order)?;
        }

        order.set_status(target);
        self.orders.put(order.clone())?;
        tracing::info!(order_id = %order_id, %from, to = %target, "order advanced");
        Ok(order)
    }

    /// Cancel from any non-terminal state.
    pub fn cancel(&self, order_id: &OrderId) -> DomainResult<Order> {
        self.advance(order_id, OrderStatus::Cancelled)
    }

    // Read every affected item first, then write the staged updates. A get
    // failure therefore aborts before the catalog is touched.
    fn deduct_stock(&self, order: &Order) -> DomainResult<()> {
        let mut staged = Vec::with_capacity(order.lines().len());
        for line in order.lines() {
            match self.catalog.get(&line.item_id)? {
                Some(mut item) => {
                    item.deduct_stock(u64::from(line.quantity));
                    staged.push(item);
                }
                None => {
                    // Recoverable partial condition: the item was removed or
                    // renamed between checkout and delivery.
                    tracing::warn!(
                        order_id = %order.id(),
                        item_id = %line.item_id,
                        "delivered line references a missing catalog item; skipping deduction"
                    );
                }
            }
        }
        for item in staged {
            tracing::debug!(
                item_id = %item.id,
                stock = item.stock_quantity,
                available = item.available,
                "stock deducted on delivery"
            );
            self.catalog.put(item)?;
        }
        Ok(())
    }
}
