//! Recovery parameters for a critical business system.
//!
//! Values are stored exactly as supplied. The recovery-time objective is an
//! input here, never derived from the other fields.

use crate::CatalogDocument;

use serde::{Deserialize, Serialize};

/// Persisted recovery parameters, keyed by `system`.
///
/// Two update paths write overlapping field sets (`maxDowntime` /
/// `recoveryBuffer` / `calculatedRTO` and `mad` / `buffer` / `rto`), so every
/// parameter is optional and absent ones are left out of the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalSystem {
    pub system: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_downtime: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery_buffer: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<f64>,
    #[serde(
        default,
        rename = "calculatedRTO",
        skip_serializing_if = "Option::is_none"
    )]
    pub calculated_rto: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mad: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rto: Option<f64>,
}

impl CatalogDocument for CriticalSystem {
    const COLLECTION: &'static str = "critical_systems";
    const KEY_FIELD: &'static str = "system";
    const LABEL: &'static str = "Critical system";

    fn key(&self) -> &str {
        &self.system
    }
}

/// Row of the built-in reference table shown to planners.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriticalSystemReference {
    pub system: &'static str,
    pub impact: &'static str,
    pub mad: f64,
    pub buffer: f64,
    pub priority: f64,
    pub rto: f64,
}

impl CriticalSystemReference {
    pub fn defaults() -> Vec<Self> {
        vec![
            Self {
                system: "Order Management",
                impact: "High revenue loss, operational halt",
                mad: 1.0,
                buffer: 1.0,
                priority: 1.0,
                rto: 2.0,
            },
            Self {
                system: "Inventory Management",
                impact: "Stock mismanagement, delivery delays",
                mad: 3.0,
                buffer: 1.0,
                priority: 1.5,
                rto: 4.0,
            },
            Self {
                system: "Customer Support",
                impact: "Customer dissatisfaction, support backlog",
                mad: 0.5,
                buffer: 0.5,
                priority: 1.0,
                rto: 1.0,
            },
        ]
    }
}
