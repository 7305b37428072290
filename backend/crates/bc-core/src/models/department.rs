//! Department entity - owner of the employee membership set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A department and the usernames that belong to it.
///
/// `employees` holds raw usernames (weak references into the account store),
/// in the order they were added. A username appears at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: Uuid,
    /// Unique human-readable key
    pub name: String,
    pub employees: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Department {
    /// Create a department from an initial member list. Repeated usernames
    /// in the list collapse to their first occurrence.
    pub fn new(name: String, employees: Vec<String>) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(employees.len());
        for username in employees {
            if !unique.contains(&username) {
                unique.push(username);
            }
        }

        Self {
            id: Uuid::new_v4(),
            name,
            employees: unique,
            created_at: Utc::now(),
        }
    }
}
