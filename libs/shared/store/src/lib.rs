use std::collections::HashMap;

use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use shared_models::AppError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("entity with id {0} already exists")]
    DuplicateId(Uuid),

    #[error("no entity with id {0}")]
    MissingId(Uuid),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateId(_) => AppError::Conflict(err.to_string()),
            StoreError::MissingId(_) => AppError::NotFound(err.to_string()),
        }
    }
}

/// Process-lifetime keyed collection standing in for a persistence layer.
/// `find_all` preserves insertion order; every reader gets clones, so
/// callers can never mutate stored state behind the lock's back.
#[derive(Debug)]
pub struct InMemoryStore<T> {
    inner: RwLock<Inner<T>>,
}

#[derive(Debug)]
struct Inner<T> {
    entries: HashMap<Uuid, T>,
    order: Vec<Uuid>,
}

impl<T: Clone> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                entries: HashMap::new(),
                order: Vec::new(),
            }),
        }
    }

    pub async fn add(&self, id: Uuid, entity: T) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        if inner.entries.contains_key(&id) {
            return Err(StoreError::DuplicateId(id));
        }
        inner.entries.insert(id, entity);
        inner.order.push(id);
        Ok(())
    }

    /// A miss is not an error here; `update`/`delete` do raise on a
    /// missing id.
    pub async fn find_by_id(&self, id: Uuid) -> Option<T> {
        self.inner.read().await.entries.get(&id).cloned()
    }

    pub async fn find_all(&self) -> Vec<T> {
        let inner = self.inner.read().await;
        inner
            .order
            .iter()
            .filter_map(|id| inner.entries.get(id).cloned())
            .collect()
    }

    pub async fn find_where(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        let inner = self.inner.read().await;
        inner
            .order
            .iter()
            .filter_map(|id| inner.entries.get(id))
            .filter(|entity| predicate(entity))
            .cloned()
            .collect()
    }

    pub async fn update(&self, id: Uuid, entity: T) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        match inner.entries.get_mut(&id) {
            Some(slot) => {
                *slot = entity;
                Ok(())
            }
            None => Err(StoreError::MissingId(id)),
        }
    }

    /// Read-modify-write under a single write lock.
    pub async fn modify<R>(
        &self,
        id: Uuid,
        apply: impl FnOnce(&mut T) -> R,
    ) -> Result<R, StoreError> {
        let mut inner = self.inner.write().await;
        match inner.entries.get_mut(&id) {
            Some(entity) => Ok(apply(entity)),
            None => Err(StoreError::MissingId(id)),
        }
    }

    pub async fn delete(&self, id: Uuid) -> Result<T, StoreError> {
        let mut inner = self.inner.write().await;
        match inner.entries.remove(&id) {
            Some(entity) => {
                inner.order.retain(|existing| *existing != id);
                Ok(entity)
            }
            None => Err(StoreError::MissingId(id)),
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.order.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl<T: Clone> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
