//! Blocking variants of the data-access layer
//!
//! Thin facades that drive the async repositories to completion on a
//! dedicated runtime, the way the driver's own sync API does it. Do not use
//! from inside an async runtime; `block_on` there will panic.

use std::sync::Arc;

use bson::Document;
use tokio::runtime::Runtime;
use uuid::Uuid;

use super::entity::Entity;
use super::store::DocumentStore;
use super::unit_of_work;
use crate::core::{AppError, Result};

/// Synchronous counterpart of [`unit_of_work::UnitOfWork`]
pub struct UnitOfWork {
    inner: unit_of_work::UnitOfWork,
    runtime: Arc<Runtime>,
}

impl UnitOfWork {
    pub fn new(store: Arc<dyn DocumentStore>) -> Result<Self> {
        let runtime = Runtime::new().map_err(|e| {
            AppError::internal(format!("Failed to start blocking runtime: {}", e))
        })?;

        Ok(Self {
            inner: unit_of_work::UnitOfWork::new(store),
            runtime: Arc::new(runtime),
        })
    }

    /// The blocking repository for `T`; backed by the same per-type cache as
    /// the async scope
    pub fn repository<T: Entity>(&self) -> Repository<T> {
        Repository {
            inner: self.inner.repository::<T>(),
            runtime: Arc::clone(&self.runtime),
        }
    }
}

/// Blocking facade over [`super::repository::Repository`], with identical
/// semantics per operation
pub struct Repository<T: Entity> {
    inner: Arc<super::repository::Repository<T>>,
    runtime: Arc<Runtime>,
}

impl<T: Entity> Repository<T> {
    pub fn get_all(&self) -> Result<Vec<T>> {
        self.runtime.block_on(self.inner.get_all())
    }

    pub fn get_many(&self, filter: Document) -> Result<Vec<T>> {
        self.runtime.block_on(self.inner.get_many(filter))
    }

    pub fn get(&self, filter: Document) -> Result<Option<T>> {
        self.runtime.block_on(self.inner.get(filter))
    }

    pub fn get_by_id(&self, id: Uuid) -> Result<Option<T>> {
        self.runtime.block_on(self.inner.get_by_id(id))
    }

    pub fn add(&self, entity: T) -> Result<()> {
        self.runtime.block_on(self.inner.add(entity))
    }

    pub fn update(&self, entity: T, id: Uuid) -> Result<()> {
        self.runtime.block_on(self.inner.update(entity, id))
    }

    pub fn delete(&self, entity: T, id: Uuid) -> Result<()> {
        self.runtime.block_on(self.inner.delete(entity, id))
    }

    pub fn delete_by_id(&self, id: Uuid) -> Result<()> {
        self.runtime.block_on(self.inner.delete_by_id(id))
    }

    pub fn delete_many(&self, filter: Document) -> Result<()> {
        self.runtime.block_on(self.inner.delete_many(filter))
    }

    pub fn delete_range(&self, entities: Vec<T>) -> Result<()> {
        self.runtime.block_on(self.inner.delete_range(entities))
    }
}
