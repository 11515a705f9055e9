use std::collections::HashMap;
use std::sync::RwLock;

use medfast_core::{DomainError, DomainResult, Entity, OrderId};

use crate::order::Order;

/// Order repository. Terminal orders stay in the store for history; nothing
/// is ever deleted.
pub trait OrderStore: Send + Sync {
    fn get(&self, id: &OrderId) -> DomainResult<Option<Order>>;
    fn put(&self, order: Order) -> DomainResult<()>;
    fn list(&self) -> DomainResult<Vec<Order>>;
}

/// In-memory order store for the host UI's session state and tests.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<HashMap<OrderId, Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderStore for InMemoryOrderStore {
    fn get(&self, id: &OrderId) -> DomainResult<Option<Order>> {
        let orders = self
            .orders
            .read()
            .map_err(|_| DomainError::conflict("order lock poisoned"))?;
        Ok(orders.get(id).cloned())
    }

    fn put(&self, order: Order) -> DomainResult<()> {
        let mut orders = self
            .orders
            .write()
            .map_err(|_| DomainError::conflict("order lock poisoned"))?;
        orders.insert(*order.id(), order);
        Ok(())
    }

    fn list(&self) -> DomainResult<Vec<Order>> {
        let orders = self
            .orders
            .read()
            .map_err(|_| DomainError::conflict("order lock poisoned"))?;
        Ok(orders.values().cloned().collect())
    }
}
