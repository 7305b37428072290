//! Auxiliary records kept in the generic document store.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A record stored as JSON in a named collection and addressed by one
/// top-level string field.
pub trait CatalogDocument: Serialize + DeserializeOwned + Send + Sync {
    /// Collection name in the document store
    const COLLECTION: &'static str;
    /// JSON field used as the lookup key in paths such as `/vendors/{name}`
    const KEY_FIELD: &'static str;
    /// Human-readable label used in response messages
    const LABEL: &'static str;

    fn key(&self) -> &str;
}
