//! Shared create / patch / delete steps for catalog collections

use crate::{ApiError, ApiResult, AppState};

use bc_core::CatalogDocument;
use bc_db::CatalogRepository;

use serde::Serialize;
use serde_json::Value;

pub(crate) fn repository<T: CatalogDocument>(state: &AppState) -> CatalogRepository<T> {
    CatalogRepository::new(state.pool.clone())
}

#[track_caller]
pub(crate) fn require_key(value: &str, field: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(format!("{field} is required"), field));
    }
    Ok(())
}

pub(crate) async fn create<T: CatalogDocument>(state: &AppState, record: &T) -> ApiResult<Value> {
    require_key(record.key(), T::KEY_FIELD)?;

    let created = repository::<T>(state).create(record).await?;
    log::info!("Created {} '{}'", T::LABEL.to_lowercase(), record.key());
    Ok(created)
}

/// Merge the set fields of `patch` into the record named `key`.
/// `patch` must skip `None` fields, a JSON null would delete the key.
pub(crate) async fn update<T: CatalogDocument, P: Serialize>(
    state: &AppState,
    key: &str,
    patch: &P,
) -> ApiResult<Value> {
    let patch = serde_json::to_value(patch).map_err(bc_db::DbError::from)?;

    repository::<T>(state)
        .update(key, &patch, false)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("{} not found", T::LABEL)))
}

pub(crate) async fn delete<T: CatalogDocument>(state: &AppState, key: &str) -> ApiResult<()> {
    repository::<T>(state)
        .delete(key)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("{} not found", T::LABEL)))?;

    log::info!("Deleted {} '{}'", T::LABEL.to_lowercase(), key);
    Ok(())
}
