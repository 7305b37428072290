//! Generic collection store over the `documents` table.
//!
//! Inserts and deletes are one SQL statement each. Updates apply an RFC 7396
//! merge patch through `json_patch` and return the new body, deletes return
//! the removed body. Filters address top-level string fields.

use crate::{DbError, Document, Filter, Result as DbErrorResult};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use serde_json::Value;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};
use uuid::Uuid;

#[derive(Clone)]
pub struct DocumentStore {
    pool: SqlitePool,
}

impl DocumentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Store `document` in `collection` and return its new id
    pub async fn insert(&self, collection: &str, document: &Value) -> DbErrorResult<String> {
        let body = object_body(document)?;
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().timestamp();

        sqlx::query(
            r#"
                INSERT INTO documents (id, collection, body, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(collection)
        .bind(body)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn find_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> DbErrorResult<Option<Document>> {
        let mut query = select(collection, filter);
        query.push(" ORDER BY created_at, rowid LIMIT 1");

        let row = query.build().fetch_optional(&self.pool).await?;

        row.as_ref().map(document_from_row).transpose()
    }

    pub async fn find_many(&self, collection: &str, filter: &Filter) -> DbErrorResult<Vec<Document>> {
        let mut query = select(collection, filter);
        query.push(" ORDER BY created_at, rowid");

        let rows = query.build().fetch_all(&self.pool).await?;

        rows.iter().map(document_from_row).collect()
    }

    /// Merge `patch` into the first document matching `filter`.
    ///
    /// With `upsert`, a missing document is created from the filter fields
    /// with the patch applied on top. Returns the document after the update,
    /// or `None` when nothing matched and `upsert` is false.
    ///
    /// The lookup and the fallback insert share one `BEGIN IMMEDIATE`
    /// transaction, so concurrent upserts on the same filter serialize on
    /// the write lock and the later ones update the row the first inserted.
    pub async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        patch: &Value,
        upsert: bool,
    ) -> DbErrorResult<Option<Document>> {
        let patch_body = object_body(patch)?;
        let seed = if upsert {
            Some(object_body(&filter.to_json())?)
        } else {
            None
        };
        let now = Utc::now().timestamp();

        let mut tx = self.pool.begin_with("BEGIN IMMEDIATE").await?;

        let mut query = QueryBuilder::<Sqlite>::new("UPDATE documents SET body = json_patch(body, ");
        query.push_bind(patch_body.clone());
        query.push("), updated_at = ");
        query.push_bind(now);
        query.push(" WHERE id = (SELECT id FROM documents WHERE collection = ");
        query.push_bind(collection);
        filter.push_clauses(&mut query);
        query.push(" ORDER BY created_at, rowid LIMIT 1) RETURNING id, body");

        let updated = query.build().fetch_optional(&mut *tx).await?;

        let row = match (updated, seed) {
            (Some(row), _) => row,
            (None, None) => return Ok(None),
            (None, Some(seed)) => {
                sqlx::query(
                    r#"
                        INSERT INTO documents (id, collection, body, created_at, updated_at)
                        VALUES (?, ?, json_patch(?, ?), ?, ?)
                        RETURNING id, body
                    "#,
                )
                .bind(Uuid::new_v4().to_string())
                .bind(collection)
                .bind(seed)
                .bind(patch_body)
                .bind(now)
                .bind(now)
                .fetch_one(&mut *tx)
                .await?
            }
        };

        tx.commit().await?;

        document_from_row(&row).map(Some)
    }

    /// Remove the first document matching `filter` and return it
    pub async fn delete_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> DbErrorResult<Option<Document>> {
        let mut query = QueryBuilder::<Sqlite>::new(
            "DELETE FROM documents WHERE id = (SELECT id FROM documents WHERE collection = ",
        );
        query.push_bind(collection);
        filter.push_clauses(&mut query);
        query.push(" ORDER BY created_at, rowid LIMIT 1) RETURNING id, body");

        let row = query.build().fetch_optional(&self.pool).await?;

        row.as_ref().map(document_from_row).transpose()
    }
}

fn select<'args>(collection: &'args str, filter: &'args Filter) -> QueryBuilder<'args, Sqlite> {
    let mut query =
        QueryBuilder::<Sqlite>::new("SELECT id, body FROM documents WHERE collection = ");
    query.push_bind(collection);
    filter.push_clauses(&mut query);
    query
}

#[track_caller]
fn object_body(value: &Value) -> DbErrorResult<String> {
    if !value.is_object() {
        return Err(DbError::InvalidDocument {
            message: "document must be a JSON object".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(serde_json::to_string(value)?)
}

fn document_from_row(row: &SqliteRow) -> DbErrorResult<Document> {
    let id: String = row.try_get("id")?;
    let body: String = row.try_get("body")?;

    Ok(Document {
        id,
        body: serde_json::from_str(&body)?,
    })
}
