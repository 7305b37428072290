use crate::CatalogDocument;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubFunction {
    pub name: String,
    #[serde(default)]
    pub problem_statement: Option<String>,
    /// Owning department id, not checked against the department store
    #[serde(default)]
    pub department: Option<String>,
}

impl CatalogDocument for SubFunction {
    const COLLECTION: &'static str = "subfunctions";
    const KEY_FIELD: &'static str = "name";
    const LABEL: &'static str = "Subfunction";

    fn key(&self) -> &str {
        &self.name
    }
}
