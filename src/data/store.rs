use async_trait::async_trait;
use bson::Document;

use crate::core::Result;

/// Capabilities the data layer needs from a document database
///
/// Filters are BSON documents in the driver's query shape. [`MongoStore`]
/// passes them through unchanged; [`MemoryStore`] interprets equality matches
/// only.
///
/// [`MongoStore`]: super::mongo::MongoStore
/// [`MemoryStore`]: super::memory::MemoryStore
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Every document matching `filter`; an empty filter matches everything
    async fn find(&self, collection: &str, filter: Document) -> Result<Vec<Document>>;

    /// First document matching `filter`, if any
    async fn find_one(&self, collection: &str, filter: Document) -> Result<Option<Document>>;

    /// Insert one document
    async fn insert_one(&self, collection: &str, document: Document) -> Result<()>;

    /// Replace the first document matching `filter`, returning the previous
    /// document when one matched
    async fn find_one_and_replace(
        &self,
        collection: &str,
        filter: Document,
        replacement: Document,
    ) -> Result<Option<Document>>;

    /// Remove the first document matching `filter`, returning it when it
    /// existed
    async fn find_one_and_delete(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>>;
}
