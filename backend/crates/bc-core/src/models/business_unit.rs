use crate::CatalogDocument;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessUnit {
    pub name: String,
    #[serde(default)]
    pub target_sales: Option<f64>,
    #[serde(default)]
    pub time_period: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

impl CatalogDocument for BusinessUnit {
    const COLLECTION: &'static str = "business_units";
    const KEY_FIELD: &'static str = "name";
    const LABEL: &'static str = "Business unit";

    fn key(&self) -> &str {
        &self.name
    }
}
