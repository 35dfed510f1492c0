use std::marker::PhantomData;
use std::sync::Arc;

use uuid::Uuid;

use super::mapping::{MapInto, MergeInto};
use crate::core::{AppError, PagingResponse, Result};
use crate::data::{Entity, Repository, UnitOfWork};

/// Generic CRUD service over one entity type
///
/// Role parameters: `E` entity, `F` filter model, `V` view model, `A` add
/// model, `U` update model. Mapping happens at this boundary, through the
/// `MapInto`/`MergeInto`/`From` bounds; the repository below only ever sees
/// entities. This is the only layer that turns an absent lookup into
/// [`AppError::NotFound`].
pub struct CrudService<E, F, V, A, U> {
    unit_of_work: Arc<UnitOfWork>,
    repository: Arc<Repository<E>>,
    _roles: PhantomData<fn() -> (F, V, A, U)>,
}

impl<E, F, V, A, U> CrudService<E, F, V, A, U>
where
    E: Entity,
    V: From<E>,
    A: MapInto<E>,
    U: MergeInto<E>,
{
    pub fn new(unit_of_work: Arc<UnitOfWork>) -> Self {
        let repository = unit_of_work.repository::<E>();
        Self {
            unit_of_work,
            repository,
            _roles: PhantomData,
        }
    }

    /// The scope this service operates in
    pub fn unit_of_work(&self) -> &Arc<UnitOfWork> {
        &self.unit_of_work
    }

    fn missing(id: Uuid) -> AppError {
        AppError::not_found(format!("{} with id '{}'", E::collection_name(), id))
    }

    /// Build an entity from `model` and persist it
    ///
    /// No derived identifier is reported back; callers re-fetch when they
    /// need the stored record.
    pub async fn add(&self, model: A) -> Result<()> {
        let entity = model.map_into();
        self.repository.add(entity).await
    }

    /// Overlay `model` onto the stored entity and persist the result
    pub async fn update(&self, model: U, id: Uuid) -> Result<Uuid> {
        let mut entity = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| Self::missing(id))?;

        model.merge_into(&mut entity);
        self.repository.update(entity, id).await?;
        Ok(id)
    }

    /// Delete the stored entity
    pub async fn delete(&self, id: Uuid) -> Result<Uuid> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| Self::missing(id))?;

        self.repository.delete_by_id(id).await?;
        Ok(id)
    }

    /// Fetch one entity as its view model
    pub async fn get(&self, id: Uuid) -> Result<V> {
        let entity = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| Self::missing(id))?;

        Ok(V::from(entity))
    }

    /// List entities as view models
    ///
    /// TODO: apply `filter` and scope the query to `user_id`; today every
    /// document in the collection comes back and `total_counts` is the full
    /// unfiltered count.
    pub async fn get_paged_result(
        &self,
        _filter: F,
        _user_id: Uuid,
    ) -> Result<PagingResponse<V>> {
        let entities = self.repository.get_all().await?;
        let total_counts = entities.len() as u64;
        let data = entities.into_iter().map(V::from).collect();
        Ok(PagingResponse::new(data, total_counts))
    }
}
