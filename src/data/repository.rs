use std::marker::PhantomData;
use std::sync::Arc;

use bson::{doc, Document};
use chrono::Utc;
use uuid::Uuid;

use super::entity::Entity;
use super::store::DocumentStore;
use crate::core::Result;

/// Generic CRUD over one entity type's collection
///
/// Reads return soft-deleted documents too; callers exclude them through
/// their own filters when they need to.
pub struct Repository<T> {
    store: Arc<dyn DocumentStore>,
    collection: &'static str,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> Repository<T> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            collection: T::collection_name(),
            _entity: PhantomData,
        }
    }

    /// Collection this repository is bound to
    pub fn collection_name(&self) -> &'static str {
        self.collection
    }

    fn filter_id(id: Uuid) -> Document {
        doc! { "id": id.to_string() }
    }

    fn decode(document: Document) -> Result<T> {
        Ok(bson::from_document(document)?)
    }

    fn encode(entity: &T) -> Result<Document> {
        Ok(bson::to_document(entity)?)
    }

    /// Get all entities
    pub async fn get_all(&self) -> Result<Vec<T>> {
        let documents = self.store.find(self.collection, doc! {}).await?;
        documents.into_iter().map(Self::decode).collect()
    }

    /// Get entities matching a filter
    pub async fn get_many(&self, filter: Document) -> Result<Vec<T>> {
        let documents = self.store.find(self.collection, filter).await?;
        documents.into_iter().map(Self::decode).collect()
    }

    /// Get the first entity matching a filter
    pub async fn get(&self, filter: Document) -> Result<Option<T>> {
        self.store
            .find_one(self.collection, filter)
            .await?
            .map(Self::decode)
            .transpose()
    }

    /// Get entity by id
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<T>> {
        self.get(Self::filter_id(id)).await
    }

    /// Add a new entity
    ///
    /// Tracked entities are stamped: `date_created` and `date_updated` both
    /// move to now. Untracked entities are stored exactly as serialized.
    pub async fn add(&self, mut entity: T) -> Result<()> {
        if let Some(tracking) = entity.tracking_mut() {
            let now = Utc::now();
            tracking.date_created = now;
            tracking.date_updated = now;
        }

        let document = Self::encode(&entity)?;
        tracing::debug!(collection = self.collection, "inserting document");
        self.store.insert_one(self.collection, document).await
    }

    /// Replace the entity stored under `id`
    ///
    /// Stamps `date_updated` on tracked entities. A missing `id` is a quiet
    /// no-op.
    pub async fn update(&self, mut entity: T, id: Uuid) -> Result<()> {
        if let Some(tracking) = entity.tracking_mut() {
            tracking.date_updated = Utc::now();
        }

        let document = Self::encode(&entity)?;
        tracing::debug!(collection = self.collection, %id, "replacing document");
        self.store
            .find_one_and_replace(self.collection, Self::filter_id(id), document)
            .await?;
        Ok(())
    }

    /// Delete the entity stored under `id`, with `entity` as the replacement
    ///
    /// Tracked types are never removed: the stored document is overwritten
    /// with the caller's `entity`, verbatim. The flagged copy of the fetched
    /// record is discarded on this path; `delete_many` and `delete_range`
    /// persist the flagged record instead. Untracked types are removed
    /// physically. A missing `id` is a quiet no-op.
    pub async fn delete(&self, entity: T, id: Uuid) -> Result<()> {
        let Some(mut existing) = self.get_by_id(id).await? else {
            return Ok(());
        };

        if let Some(tracking) = existing.tracking_mut() {
            tracking.is_deleted = true;
            tracking.date_updated = Utc::now();

            let replacement = Self::encode(&entity)?;
            tracing::debug!(collection = self.collection, %id, "soft-deleting document");
            self.store
                .find_one_and_replace(self.collection, Self::filter_id(id), replacement)
                .await?;
            return Ok(());
        }

        tracing::debug!(collection = self.collection, %id, "deleting document");
        self.store
            .find_one_and_delete(self.collection, Self::filter_id(id))
            .await?;
        Ok(())
    }

    /// Delete the entity stored under `id`
    ///
    /// Tracked types persist the flagged record; untracked types are removed
    /// physically. A missing `id` is a quiet no-op.
    pub async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        let Some(mut existing) = self.get_by_id(id).await? else {
            return Ok(());
        };

        if let Some(tracking) = existing.tracking_mut() {
            tracking.is_deleted = true;
            tracking.date_updated = Utc::now();

            let document = Self::encode(&existing)?;
            tracing::debug!(collection = self.collection, %id, "soft-deleting document");
            self.store
                .find_one_and_replace(self.collection, Self::filter_id(id), document)
                .await?;
            return Ok(());
        }

        tracing::debug!(collection = self.collection, %id, "deleting document");
        self.store
            .find_one_and_delete(self.collection, Self::filter_id(id))
            .await?;
        Ok(())
    }

    /// Soft-delete every tracked entity matching `filter`
    ///
    /// Untracked matches are skipped; this path never removes documents
    /// physically.
    pub async fn delete_many(&self, filter: Document) -> Result<()> {
        let entities = self.get_many(filter).await?;
        for mut entity in entities {
            let Some(tracking) = entity.tracking_mut() else {
                continue;
            };
            tracking.is_deleted = true;
            tracking.date_updated = Utc::now();
            let id = tracking.id;

            let document = Self::encode(&entity)?;
            self.store
                .find_one_and_replace(self.collection, Self::filter_id(id), document)
                .await?;
        }
        Ok(())
    }

    /// Soft-delete every supplied tracked entity, keyed by its own id
    ///
    /// Untracked entries are skipped; this path never removes documents
    /// physically.
    pub async fn delete_range(&self, entities: Vec<T>) -> Result<()> {
        for mut entity in entities {
            let Some(tracking) = entity.tracking_mut() else {
                continue;
            };
            tracking.is_deleted = true;
            tracking.date_updated = Utc::now();
            let id = tracking.id;

            let document = Self::encode(&entity)?;
            self.store
                .find_one_and_replace(self.collection, Self::filter_id(id), document)
                .await?;
        }
        Ok(())
    }
}
