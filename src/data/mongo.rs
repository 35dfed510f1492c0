use async_trait::async_trait;
use bson::Document;
use futures_util::TryStreamExt;
use mongodb::{Client, Collection, Database};

use super::store::DocumentStore;
use crate::config::DatabaseConfig;
use crate::core::Result;

/// Document store backed by MongoDB
///
/// The client keeps its own connection pool and is safe to share across
/// concurrent unit-of-work scopes; clone freely.
#[derive(Clone)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Connect and bind to the configured database
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let client = Client::with_uri_str(&config.connection_string).await?;
        Ok(Self {
            database: client.database(&config.database_name),
        })
    }

    /// Wrap an already-established database handle
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find(&self, collection: &str, filter: Document) -> Result<Vec<Document>> {
        let cursor = self.collection(collection).find(filter).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_one(&self, collection: &str, filter: Document) -> Result<Option<Document>> {
        Ok(self.collection(collection).find_one(filter).await?)
    }

    async fn insert_one(&self, collection: &str, document: Document) -> Result<()> {
        self.collection(collection).insert_one(document).await?;
        Ok(())
    }

    async fn find_one_and_replace(
        &self,
        collection: &str,
        filter: Document,
        replacement: Document,
    ) -> Result<Option<Document>> {
        Ok(self
            .collection(collection)
            .find_one_and_replace(filter, replacement)
            .await?)
    }

    async fn find_one_and_delete(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>> {
        Ok(self
            .collection(collection)
            .find_one_and_delete(filter)
            .await?)
    }
}
