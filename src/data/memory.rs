use std::collections::HashMap;

use async_trait::async_trait;
use bson::Document;
use tokio::sync::RwLock;

use super::store::DocumentStore;
use crate::core::Result;

/// In-memory document store for tests and local development
///
/// Collections live in a map behind an async read-write lock. Filter matching
/// is equality-only: a document matches when every key in the filter is
/// present with an equal value. Query operators (`$gt`, `$in`, ...) are not
/// interpreted.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held in `collection`
    pub async fn count(&self, collection: &str) -> usize {
        let collections = self.collections.read().await;
        collections.get(collection).map_or(0, Vec::len)
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(&self, collection: &str, filter: Document) -> Result<Vec<Document>> {
        let collections = self.collections.read().await;
        let documents = collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|document| matches(document, &filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(documents)
    }

    async fn find_one(&self, collection: &str, filter: Document) -> Result<Option<Document>> {
        let collections = self.collections.read().await;
        let document = collections
            .get(collection)
            .and_then(|documents| documents.iter().find(|document| matches(document, &filter)))
            .cloned();
        Ok(document)
    }

    async fn insert_one(&self, collection: &str, document: Document) -> Result<()> {
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(document);
        Ok(())
    }

    async fn find_one_and_replace(
        &self,
        collection: &str,
        filter: Document,
        replacement: Document,
    ) -> Result<Option<Document>> {
        let mut collections = self.collections.write().await;
        let Some(documents) = collections.get_mut(collection) else {
            return Ok(None);
        };

        match documents
            .iter()
            .position(|document| matches(document, &filter))
        {
            Some(position) => Ok(Some(std::mem::replace(
                &mut documents[position],
                replacement,
            ))),
            None => Ok(None),
        }
    }

    async fn find_one_and_delete(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>> {
        let mut collections = self.collections.write().await;
        let Some(documents) = collections.get_mut(collection) else {
            return Ok(None);
        };

        match documents
            .iter()
            .position(|document| matches(document, &filter))
        {
            Some(position) => Ok(Some(documents.remove(position))),
            None => Ok(None),
        }
    }
}
