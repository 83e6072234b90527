use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::core::error::{AppError, Result};

/// Contract an entity type implements to live in a [`Repository`].
///
/// Keys are i32 and ascend; `BTreeMap` ordering gives deterministic,
/// key-ascending iteration for paginated reads.
pub trait Keyed: Clone + Send + Sync + 'static {
    /// When true the repository assigns the next ascending key on create;
    /// when false the caller supplies the key (e.g. a villa number).
    const AUTO_KEY: bool;

    /// Entity name used in repository error messages.
    const ENTITY: &'static str;

    fn key(&self) -> i32;
    fn set_key(&mut self, key: i32);
}

/// Generic in-memory repository: typed CRUD plus filtered/paginated queries
/// over a single entity type. Filters are plain closures over `&T`.
///
/// Every call takes the lock once, so each operation is one atomic
/// "transaction"; concurrent updates are last-write-wins. The repository does
/// no file I/O, mapping or authorization - those belong to the layers above.
pub struct Repository<T: Keyed> {
    rows: Arc<RwLock<BTreeMap<i32, T>>>,
}

impl<T: Keyed> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
        }
    }
}

impl<T: Keyed> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Keyed> Repository<T> {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Return all matching records in key-ascending order.
    ///
    /// With `page_size > 0` only the slice
    /// `[(page_number - 1) * page_size, page_number * page_size)` of the
    /// filtered set is returned; `page_size <= 0` returns everything.
    pub async fn get_all<F>(&self, filter: Option<F>, page_size: i32, page_number: i32) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        let rows = self.rows.read().await;
        let matched = rows
            .values()
            .filter(|row| filter.as_ref().map_or(true, |f| f(row)));

        if page_size > 0 {
            let page = page_number.max(1) as usize;
            let size = page_size as usize;
            matched.skip((page - 1) * size).take(size).cloned().collect()
        } else {
            matched.cloned().collect()
        }
    }

    /// First record matching the filter, as a detached clone. Mutating the
    /// returned value has no effect on the store until `update` is called.
    pub async fn get_one<F>(&self, filter: F) -> Option<T>
    where
        F: Fn(&T) -> bool,
    {
        self.rows.read().await.values().find(|row| filter(row)).cloned()
    }

    /// Persist a new record, assigning the next ascending key for auto-keyed
    /// entity types. Returns the stored entity including the generated key.
    pub async fn create(&self, mut entity: T) -> Result<T> {
        let mut rows = self.rows.write().await;

        if T::AUTO_KEY {
            let next = rows.keys().next_back().copied().unwrap_or(0) + 1;
            entity.set_key(next);
        } else if entity.key() <= 0 {
            return Err(AppError::validation(format!(
                "{} key is required",
                T::ENTITY
            )));
        } else if rows.contains_key(&entity.key()) {
            return Err(AppError::Conflict(format!(
                "{} {} already exists",
                T::ENTITY,
                entity.key()
            )));
        }

        rows.insert(entity.key(), entity.clone());
        Ok(entity)
    }

    /// Full replace of an existing record keyed by its identifier.
    pub async fn update(&self, entity: T) -> Result<T> {
        let mut rows = self.rows.write().await;
        if !rows.contains_key(&entity.key()) {
            return Err(AppError::NotFound(format!(
                "{} {} not found",
                T::ENTITY,
                entity.key()
            )));
        }
        rows.insert(entity.key(), entity.clone());
        Ok(entity)
    }

    /// Delete the record with the given key. Removing a key that no longer
    /// exists is surfaced as not-found rather than silently succeeding.
    pub async fn remove(&self, key: i32) -> Result<()> {
        let mut rows = self.rows.write().await;
        rows.remove(&key)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("{} {} not found", T::ENTITY, key)))
    }

    pub async fn count(&self) -> usize {
        self.rows.read().await.len()
    }
}
