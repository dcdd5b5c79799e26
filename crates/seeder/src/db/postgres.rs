//! `PostgreSQL` backend.
//!
//! Each collection is a table inside a schema named after the configured
//! database name:
//!
//! ```sql
//! CREATE TABLE <schema>.<collection> (
//!     _id         TEXT PRIMARY KEY,
//!     document    JSONB NOT NULL,      -- fields + id + __v
//!     created_at  TIMESTAMPTZ NOT NULL,
//!     updated_at  TIMESTAMPTZ NOT NULL,
//!     version     INTEGER NOT NULL DEFAULT 0
//! );
//! ```
//!
//! Tables are created on connect. Replacing a collection runs in a single
//! transaction.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::debug;

use super::{
    Collection, Document, DocumentStore, ReplaceOutcome, SEED_VERSION, StoreError,
    StoredDocument,
};

/// Rows per INSERT statement (5 binds per row, well under the 65535 limit).
const INSERT_BATCH_SIZE: usize = 1_000;

/// Connection pool scoped to one schema.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
    schema: String,
}

impl PostgresStore {
    /// Connect and create the schema and collection tables if missing.
    ///
    /// `schema` must already be a validated identifier (see
    /// [`crate::config::DatabaseConfig`]).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Postgres` if the connection or DDL fails.
    pub async fn connect(uri: &SecretString, schema: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .acquire_timeout(Duration::from_secs(10))
            .connect(uri.expose_secret())
            .await?;

        let store = Self {
            pool,
            schema: schema.to_owned(),
        };
        store.ensure_collections().await?;
        Ok(store)
    }

    async fn ensure_collections(&self) -> Result<(), StoreError> {
        sqlx::query(&format!(r#"CREATE SCHEMA IF NOT EXISTS "{}""#, self.schema))
            .execute(&self.pool)
            .await?;

        for collection in Collection::ALL {
            let table = self.table(collection);
            sqlx::query(&format!(
                r"
                CREATE TABLE IF NOT EXISTS {table} (
                    _id TEXT PRIMARY KEY,
                    document JSONB NOT NULL,
                    created_at TIMESTAMPTZ NOT NULL,
                    updated_at TIMESTAMPTZ NOT NULL,
                    version INTEGER NOT NULL DEFAULT 0
                )
                "
            ))
            .execute(&self.pool)
            .await?;
        }

        debug!(schema = %self.schema, "Collection tables ready");
        Ok(())
    }

    fn table(&self, collection: Collection) -> String {
        format!(r#""{}"."{}""#, self.schema, collection.as_str())
    }
}

impl DocumentStore for PostgresStore {
    async fn replace_all(
        &self,
        collection: Collection,
        documents: &[Document],
    ) -> Result<ReplaceOutcome, StoreError> {
        let table = self.table(collection);
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query(&format!("DELETE FROM {table}"))
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let mut inserted = 0;
        for chunk in documents.chunks(INSERT_BATCH_SIZE) {
            let mut builder: QueryBuilder<'_, Postgres> = QueryBuilder::new(format!(
                "INSERT INTO {table} (_id, document, created_at, updated_at, version) "
            ));
            builder.push_values(chunk, |mut row, document| {
                row.push_bind(document.id.clone())
                    .push_bind(Json(document.body()))
                    .push_bind(document.created_at)
                    .push_bind(document.updated_at)
                    .push_bind(SEED_VERSION);
            });
            inserted += builder.build().execute(&mut *tx).await?.rows_affected();
        }

        tx.commit().await?;
        Ok(ReplaceOutcome { deleted, inserted })
    }

    async fn find_all(&self, collection: Collection) -> Result<Vec<StoredDocument>, StoreError> {
        let rows: Vec<(String, Json<Value>)> = sqlx::query_as(&format!(
            "SELECT _id, document FROM {} ORDER BY created_at, _id",
            self.table(collection)
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|(id, Json(document))| match document {
                Value::Object(fields) => Ok(StoredDocument { id, fields }),
                other => Err(StoreError::Malformed {
                    collection,
                    reason: format!("document for {id} is not an object: {other}"),
                }),
            })
            .collect()
    }

    async fn count(&self, collection: Collection) -> Result<u64, StoreError> {
        let count: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM {}",
            self.table(collection)
        ))
        .fetch_one(&self.pool)
        .await?;
        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
