/**
 * Document Store Adapter
 *
 * This module provides a typed connection to persistent document
 * collections. Each collection is a SQLite table with two columns:
 * a generated `id` (UUID v4 string, primary key) and a `doc` column
 * holding the record as a JSON document. Field-match queries go through
 * SQLite's `json_extract`.
 *
 * # Ordering
 *
 * `find_all` and `find_by_field` return documents in `rowid` order, i.e.
 * insertion order. That is the store's natural order; callers get no
 * stronger guarantee.
 *
 * # Concurrency
 *
 * Per-document write atomicity is delegated entirely to SQLite. There is
 * no application-level locking and no multi-document transaction: two
 * concurrent writers to the same document race, last write wins.
 *
 * # Schema
 *
 * Tables and indexes are created by `sqlx::migrate!` from the
 * `migrations/` directory when the store connects. The `users` collection
 * carries a unique index on `json_extract(doc, '$.email')`, so a racing
 * duplicate signup surfaces as a unique violation instead of corrupting
 * the collection.
 */

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use thiserror::Error;
use uuid::Uuid;

use crate::entities::{Question, Reply, User};

/// Errors surfaced by the document store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying SQLite failure (connection, query, decode)
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure at connect time
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A record could not be encoded to or decoded from JSON
    #[error("document serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// True when the error is a unique-index violation (e.g. a duplicate
    /// email racing past the handler's existence check).
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Database(sqlx::Error::Database(db)) => db.is_unique_violation(),
            _ => false,
        }
    }
}

/// A stored record together with its generated identifier.
///
/// The record's own fields are flattened next to `id` on the wire, so a
/// stored question serializes as
/// `{"id": "...", "title": "...", "description": "...", ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document<T> {
    /// Generated identifier (UUID v4)
    pub id: String,
    /// The record itself
    #[serde(flatten)]
    pub doc: T,
}

/// Handle to the document store.
///
/// Cheap to clone (wraps a connection pool). Constructed once at process
/// start and passed to handlers through the router state; there is no
/// process-wide singleton.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Connect to the store at `url` and run schema migrations.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new().connect(url).await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }

    /// Open a fresh in-memory store, for tests.
    ///
    /// Capped at one connection: every `:memory:` connection is its own
    /// database, so a larger pool would scatter writes.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }

    /// The user collection.
    pub fn users(&self) -> Collection<User> {
        self.collection("users")
    }

    /// The question collection.
    pub fn questions(&self) -> Collection<Question> {
        self.collection("questions")
    }

    /// The reply collection.
    pub fn replies(&self) -> Collection<Reply> {
        self.collection("replies")
    }

    fn collection<T>(&self, table: &'static str) -> Collection<T> {
        Collection {
            pool: self.pool.clone(),
            table,
            _marker: PhantomData,
        }
    }
}

/// Typed view of one document collection.
pub struct Collection<T> {
    pool: SqlitePool,
    table: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Insert a record, generating its identifier.
    pub async fn insert(&self, doc: T) -> Result<Document<T>, StoreError> {
        let id = Uuid::new_v4().to_string();
        let encoded = serde_json::to_string(&doc)?;
        let sql = format!("INSERT INTO {} (id, doc) VALUES (?1, ?2)", self.table);
        sqlx::query(&sql)
            .bind(&id)
            .bind(&encoded)
            .execute(&self.pool)
            .await?;
        Ok(Document { id, doc })
    }

    /// Look up a record by identifier.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Document<T>>, StoreError> {
        let sql = format!("SELECT id, doc FROM {} WHERE id = ?1", self.table);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(Self::decode_row).transpose()
    }

    /// All records, in insertion order.
    pub async fn find_all(&self) -> Result<Vec<Document<T>>, StoreError> {
        let sql = format!("SELECT id, doc FROM {} ORDER BY rowid", self.table);
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.into_iter().map(Self::decode_row).collect()
    }

    /// All records whose top-level `field` equals `value`, in insertion
    /// order. An unknown field or unmatched value yields an empty vec,
    /// never an error.
    pub async fn find_by_field(
        &self,
        field: &str,
        value: &str,
    ) -> Result<Vec<Document<T>>, StoreError> {
        let sql = format!(
            "SELECT id, doc FROM {} WHERE json_extract(doc, ?1) = ?2 ORDER BY rowid",
            self.table
        );
        let rows = sqlx::query(&sql)
            .bind(format!("$.{field}"))
            .bind(value)
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(Self::decode_row).collect()
    }

    /// Replace the record at `id` with `doc`. Returns `None` when `id`
    /// does not resolve.
    pub async fn replace(&self, id: &str, doc: T) -> Result<Option<Document<T>>, StoreError> {
        let encoded = serde_json::to_string(&doc)?;
        let sql = format!("UPDATE {} SET doc = ?2 WHERE id = ?1", self.table);
        let result = sqlx::query(&sql)
            .bind(id)
            .bind(&encoded)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(Document {
            id: id.to_string(),
            doc,
        }))
    }

    /// Delete the record at `id`. Returns false when `id` does not
    /// resolve.
    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", self.table);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    fn decode_row(row: SqliteRow) -> Result<Document<T>, StoreError> {
        let id: String = row.try_get("id")?;
        let encoded: String = row.try_get("doc")?;
        let doc = serde_json::from_str(&encoded)?;
        Ok(Document { id, doc })
    }
}
