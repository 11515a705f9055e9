use std::collections::HashMap;
use std::sync::RwLock;

use medfast_core::{DomainError, DomainResult, ItemId};

use crate::item::CatalogItem;

/// Authoritative mapping of item id -> item record.
///
/// Both the inventory manager and the order lifecycle mutate through this
/// interface. Implementations must make `get`-then-`put` of a single item a
/// non-interleaved step for the one-mutator model used here; a multi-client
/// port needs per-item locking or compare-and-swap on `stock_quantity`.
pub trait CatalogStore: Send + Sync {
    fn get(&self, id: &ItemId) -> DomainResult<Option<CatalogItem>>;
    fn put(&self, item: CatalogItem) -> DomainResult<()>;
    fn list(&self) -> DomainResult<Vec<CatalogItem>>;
}

/// In-memory catalog store.
///
/// Intended for the host UI's session-scoped state and for tests; nothing
/// survives a process restart.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    items: RwLock<HashMap<ItemId, CatalogItem>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store from a batch of items (mock data, fixtures).
    pub fn seeded(items: impl IntoIterator<Item = CatalogItem>) -> Self {
        let store = Self::new();
        let mut map = store.items.write().unwrap_or_else(|e| e.into_inner());
        for item in items {
            map.insert(item.id, item);
        }
        drop(map);
        store
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn get(&self, id: &ItemId) -> DomainResult<Option<CatalogItem>> {
        let items = self
            .items
            .read()
            .map_err(|_| DomainError::conflict("catalog lock poisoned"))?;
        Ok(items.get(id).cloned())
    }

    fn put(&self, item: CatalogItem) -> DomainResult<()> {
        let mut items = self
            .items
            .write()
            .map_err(|_| DomainError::conflict("catalog lock poisoned"))?;
        items.insert(item.id, item);
        Ok(())
    }

    fn list(&self) -> DomainResult<Vec<CatalogItem>> {
        let items = self
            .items
            .read()
            .map_err(|_| DomainError::conflict("catalog lock poisoned"))?;
        Ok(items.values().cloned().collect())
    }
}
