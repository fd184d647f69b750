use std::collections::BTreeMap;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{Item, ItemId, ItemPayload};

/// Errors returned by store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("item with id {0} not found")]
    NotFound(ItemId),
}

struct Inner {
    items: BTreeMap<ItemId, Item>,
    next_id: ItemId,
}

/// Shareable in-memory item store for use across async handlers
///
/// All state sits behind a single reader/writer lock: `get`, `list` and
/// `len` share the read side, `add`, `update` and `delete` are exclusive.
/// Cloning yields another handle to the same items.
#[derive(Clone)]
pub struct ItemStore {
    inner: Arc<RwLock<Inner>>,
}

impl ItemStore {
    /// Create an empty store whose first assigned id is 1
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                items: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }

    /// Read an item by id
    pub async fn get(&self, id: ItemId) -> Result<Item, StoreError> {
        let inner = self.inner.read().await;
        inner.items.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    /// Store a new item and return the id assigned to it
    ///
    /// Ids are taken from a counter that only moves forward, so an id is
    /// never handed out twice, even after the item holding it is deleted.
    pub async fn add(&self, candidate: ItemPayload) -> ItemId {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.items.insert(
            id,
            Item {
                id,
                name: candidate.name,
                value: candidate.value,
            },
        );
        inner.next_id += 1;

        tracing::debug!("Added item with id: {}", id);
        id
    }

    /// Replace the name and value of an existing item, keeping its id
    pub async fn update(&self, id: ItemId, replacement: ItemPayload) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let item = inner.items.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        item.name = replacement.name;
        item.value = replacement.value;

        tracing::debug!("Updated item with id: {}", id);
        Ok(())
    }

    /// Remove an item permanently
    pub async fn delete(&self, id: ItemId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner.items.remove(&id).ok_or(StoreError::NotFound(id))?;

        tracing::debug!("Deleted item with id: {}", id);
        Ok(())
    }

    /// Snapshot of all items, in ascending id order
    pub async fn list(&self) -> Vec<Item> {
        let inner = self.inner.read().await;
        inner.items.values().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.items.len()
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
