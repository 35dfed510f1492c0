use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use super::entity::Entity;
use super::repository::Repository;
use super::store::DocumentStore;

/// Scope that owns one store handle and caches one repository per entity type
///
/// Create one per logical operation (typically per request). Repositories are
/// built lazily on first use and the same `Arc` comes back for the rest of
/// the scope. Dropping the scope drops its reference to the store handle.
pub struct UnitOfWork {
    store: Arc<dyn DocumentStore>,
    repositories: Mutex<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl UnitOfWork {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            repositories: Mutex::new(HashMap::new()),
        }
    }

    /// The shared store handle
    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    /// The repository for `T`, built on first call and cached after
    pub fn repository<T: Entity>(&self) -> Arc<Repository<T>> {
        let mut repositories = self.repositories.lock();

        if let Some(repository) = repositories
            .get(&TypeId::of::<T>())
            .and_then(|cached| Arc::clone(cached).downcast::<Repository<T>>().ok())
        {
            return repository;
        }

        let repository = Arc::new(Repository::<T>::new(Arc::clone(&self.store)));
        repositories.insert(TypeId::of::<T>(), repository.clone());
        repository
    }
}
