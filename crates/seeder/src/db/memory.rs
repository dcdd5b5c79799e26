//! In-process document store.
//!
//! Backs `--dry-run` and the test suites. Clones share the same contents.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;

use super::{Collection, Document, DocumentStore, ReplaceOutcome, StoreError, StoredDocument};

/// Collections held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    collections: Arc<Mutex<HashMap<Collection, Vec<Document>>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a collection's documents, in insertion order.
    #[must_use]
    pub fn documents(&self, collection: Collection) -> Vec<Document> {
        self.lock().get(&collection).cloned().unwrap_or_default()
    }

    /// Append documents without clearing, e.g. to simulate leftovers from a
    /// previous run.
    pub fn insert(&self, collection: Collection, documents: impl IntoIterator<Item = Document>) {
        self.lock().entry(collection).or_default().extend(documents);
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Collection, Vec<Document>>> {
        self.collections
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl DocumentStore for MemoryStore {
    async fn replace_all(
        &self,
        collection: Collection,
        documents: &[Document],
    ) -> Result<ReplaceOutcome, StoreError> {
        let mut collections = self.lock();
        let slot = collections.entry(collection).or_default();
        let deleted = slot.len() as u64;
        *slot = documents.to_vec();
        Ok(ReplaceOutcome {
            deleted,
            inserted: documents.len() as u64,
        })
    }

    async fn find_all(&self, collection: Collection) -> Result<Vec<StoredDocument>, StoreError> {
        self.documents(collection)
            .into_iter()
            .map(|doc| match doc.body() {
                Value::Object(fields) => Ok(StoredDocument { id: doc.id, fields }),
                other => Err(StoreError::Malformed {
                    collection,
                    reason: format!("document for {} is not an object: {other}", doc.id),
                }),
            })
            .collect()
    }

    async fn count(&self, collection: Collection) -> Result<u64, StoreError> {
        Ok(self.lock().get(&collection).map_or(0, Vec::len) as u64)
    }

    async fn close(&self) {}
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use serde_json::Map;

    use super::*;

    fn doc(id: &str) -> Document {
        let now = Utc::now();
        Document {
            id: id.to_owned(),
            fields: Map::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_replace_all_clears_previous_contents() {
        let store = MemoryStore::new();
        store.insert(Collection::Products, [doc("PRODUCT-old-1"), doc("PRODUCT-old-2")]);

        let outcome = store
            .replace_all(Collection::Products, &[doc("PRODUCT-new")])
            .await
            .unwrap();

        assert_eq!(outcome.deleted, 2);
        assert_eq!(outcome.inserted, 1);
        let ids: Vec<_> = store
            .documents(Collection::Products)
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, ["PRODUCT-new"]);
    }

    #[tokio::test]
    async fn test_replace_all_with_nothing_empties_collection() {
        let store = MemoryStore::new();
        store.insert(Collection::Orders, [doc("ORDER-1")]);

        let outcome = store.replace_all(Collection::Orders, &[]).await.unwrap();

        assert_eq!(outcome, ReplaceOutcome { deleted: 1, inserted: 0 });
        assert_eq!(store.count(Collection::Orders).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_clones_share_contents() {
        let store = MemoryStore::new();
        let other = store.clone();
        other.insert(Collection::Admins, [doc("ADMIN-1")]);

        assert_eq!(store.count(Collection::Admins).await.unwrap(), 1);
        assert_eq!(store.find_all(Collection::Admins).await.unwrap()[0].id, "ADMIN-1");
    }

    #[tokio::test]
    async fn test_find_all_includes_id_field() {
        let store = MemoryStore::new();
        store.insert(Collection::Products, [doc("PRODUCT-1")]);

        let found = store.find_all(Collection::Products).await.unwrap();
        assert_eq!(found[0].fields["id"], "PRODUCT-1");
    }
}
