use sqlx::{QueryBuilder, Sqlite};

/// Conjunction of equality tests on top-level string fields of a document.
/// An empty filter matches every document in the collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    clauses: Vec<(String, String)>,
}

impl Filter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.clauses.push((field.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The filter as a JSON object, used as the seed of an upserted document
    pub fn to_json(&self) -> serde_json::Value {
        let object = self
            .clauses
            .iter()
            .map(|(field, value)| (field.clone(), serde_json::Value::String(value.clone())))
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(object)
    }

    /// Append `AND json_extract(body, '$.field') = value` for every clause
    pub(crate) fn push_clauses<'args>(&'args self, query: &mut QueryBuilder<'args, Sqlite>) {
        for (field, value) in &self.clauses {
            query.push(" AND json_extract(body, ");
            query.push_bind(format!("$.{field}"));
            query.push(") = ");
            query.push_bind(value.as_str());
        }
    }
}
