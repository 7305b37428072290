use crate::CatalogDocument;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub name: String,
    #[serde(default)]
    pub product: Option<String>,
}

impl CatalogDocument for Vendor {
    const COLLECTION: &'static str = "vendors";
    const KEY_FIELD: &'static str = "name";
    const LABEL: &'static str = "Vendor";

    fn key(&self) -> &str {
        &self.name
    }
}
