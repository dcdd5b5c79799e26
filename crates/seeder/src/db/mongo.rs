//! MongoDB backend.
//!
//! Writes documents exactly as the dashboard's Mongoose models store them:
//! string `_id`, BSON dates for `createdAt`/`updatedAt`, `__v: 0`.
//! Delete and insert are separate operations (no transaction), so a failed
//! insert leaves the collection empty.

use futures::TryStreamExt;
use mongodb::bson::{self, Bson, doc};
use mongodb::{Client, Database};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::debug;

use super::{
    Collection, Document, DocumentStore, ReplaceOutcome, SEED_VERSION, StoreError,
    StoredDocument, VERSION_KEY,
};

/// Connection to one MongoDB database.
#[derive(Debug, Clone)]
pub struct MongoStore {
    client: Client,
    database: Database,
}

impl MongoStore {
    /// Connect and ping the server so bad URIs fail here rather than on the
    /// first write.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Mongo` if the URI is invalid or the server is
    /// unreachable.
    pub async fn connect(uri: &SecretString, database: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri.expose_secret()).await?;
        let database = client.database(database);
        database.run_command(doc! { "ping": 1 }).await?;
        Ok(Self { client, database })
    }

    fn collection(&self, collection: Collection) -> mongodb::Collection<bson::Document> {
        self.database.collection(collection.as_str())
    }
}

impl DocumentStore for MongoStore {
    async fn replace_all(
        &self,
        collection: Collection,
        documents: &[Document],
    ) -> Result<ReplaceOutcome, StoreError> {
        let encoded = documents
            .iter()
            .map(to_bson_document)
            .collect::<Result<Vec<_>, _>>()?;

        let target = self.collection(collection);
        let deleted = target.delete_many(doc! {}).await?.deleted_count;
        debug!(%collection, deleted, "Cleared collection");

        // insert_many rejects an empty batch
        if encoded.is_empty() {
            return Ok(ReplaceOutcome {
                deleted,
                inserted: 0,
            });
        }

        let result = target.insert_many(encoded).await?;
        Ok(ReplaceOutcome {
            deleted,
            inserted: result.inserted_ids.len() as u64,
        })
    }

    async fn find_all(&self, collection: Collection) -> Result<Vec<StoredDocument>, StoreError> {
        let cursor = self.collection(collection).find(doc! {}).await?;
        let documents: Vec<bson::Document> = cursor.try_collect().await?;
        documents
            .into_iter()
            .map(|document| from_bson_document(collection, document))
            .collect()
    }

    async fn count(&self, collection: Collection) -> Result<u64, StoreError> {
        Ok(self.collection(collection).count_documents(doc! {}).await?)
    }

    async fn close(&self) {
        self.client.clone().shutdown().await;
    }
}

fn to_bson_document(document: &Document) -> Result<bson::Document, StoreError> {
    let mut encoded = bson::Document::new();
    encoded.insert("_id", document.id.as_str());
    encoded.insert("id", document.id.as_str());
    for (key, value) in &document.fields {
        let value = bson::to_bson(value).map_err(|e| StoreError::Encoding(e.to_string()))?;
        encoded.insert(key.as_str(), value);
    }
    encoded.insert(
        "createdAt",
        bson::DateTime::from_millis(document.created_at.timestamp_millis()),
    );
    encoded.insert(
        "updatedAt",
        bson::DateTime::from_millis(document.updated_at.timestamp_millis()),
    );
    encoded.insert(VERSION_KEY, SEED_VERSION);
    Ok(encoded)
}

fn from_bson_document(
    collection: Collection,
    document: bson::Document,
) -> Result<StoredDocument, StoreError> {
    let id = document
        .get_str("_id")
        .map_err(|e| StoreError::Malformed {
            collection,
            reason: format!("_id: {e}"),
        })?
        .to_owned();

    match Bson::Document(document).into_relaxed_extjson() {
        Value::Object(fields) => Ok(StoredDocument { id, fields }),
        other => Err(StoreError::Malformed {
            collection,
            reason: format!("expected an object, got {other}"),
        }),
    }
}
