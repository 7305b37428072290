use crate::Result as DbErrorResult;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// A stored JSON document and its generated id
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub body: Value,
}

impl Document {
    /// Decode the body into a typed record
    pub fn decode<T: DeserializeOwned>(&self) -> DbErrorResult<T> {
        Ok(serde_json::from_value(self.body.clone())?)
    }

    /// The body with `id` added, as returned to API clients
    pub fn into_json(self) -> Value {
        match self.body {
            Value::Object(mut object) => {
                object.insert("id".to_string(), Value::String(self.id));
                Value::Object(object)
            }
            other => other,
        }
    }
}
