//! Typed access to one catalog collection.

use crate::{DocumentStore, Filter, Result as DbErrorResult};

use bc_core::CatalogDocument;

use std::marker::PhantomData;

use serde_json::Value;
use sqlx::SqlitePool;

/// A typed view of the collection `T::COLLECTION`, addressed by
/// `T::KEY_FIELD`. Returned values are the stored JSON bodies with `id`
/// added.
pub struct CatalogRepository<T: CatalogDocument> {
    store: DocumentStore,
    _marker: PhantomData<fn() -> T>,
}

impl<T: CatalogDocument> Clone for CatalogRepository<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: CatalogDocument> CatalogRepository<T> {
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_store(DocumentStore::new(pool))
    }

    pub fn with_store(store: DocumentStore) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    fn by_key(key: &str) -> Filter {
        Filter::all().eq(T::KEY_FIELD, key)
    }

    /// Store a new record, returning it with its id
    pub async fn create(&self, record: &T) -> DbErrorResult<Value> {
        let body = serde_json::to_value(record)?;
        let id = self.store.insert(T::COLLECTION, &body).await?;

        let mut json = body;
        if let Value::Object(object) = &mut json {
            object.insert("id".to_string(), Value::String(id));
        }
        Ok(json)
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Value>> {
        let documents = self.store.find_many(T::COLLECTION, &Filter::all()).await?;
        Ok(documents.into_iter().map(|d| d.into_json()).collect())
    }

    pub async fn find_by_key(&self, key: &str) -> DbErrorResult<Option<T>> {
        self.store
            .find_one(T::COLLECTION, &Self::by_key(key))
            .await?
            .map(|d| d.decode())
            .transpose()
    }

    /// Merge `patch` into the record with this key. With `upsert` a missing
    /// record is created from the key and the patch.
    pub async fn update(
        &self,
        key: &str,
        patch: &Value,
        upsert: bool,
    ) -> DbErrorResult<Option<Value>> {
        let document = self
            .store
            .update_one(T::COLLECTION, &Self::by_key(key), patch, upsert)
            .await?;
        Ok(document.map(|d| d.into_json()))
    }

    pub async fn delete(&self, key: &str) -> DbErrorResult<Option<Value>> {
        let document = self
            .store
            .delete_one(T::COLLECTION, &Self::by_key(key))
            .await?;
        Ok(document.map(|d| d.into_json()))
    }
}
