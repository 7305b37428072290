use bc_core::CriticalSystem;

use serde::Deserialize;

/// Body of POST /update-critical-system
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCriticalSystemRequest {
    pub system: String,
    #[serde(default)]
    pub max_downtime: Option<f64>,
    #[serde(default)]
    pub recovery_buffer: Option<f64>,
    #[serde(default)]
    pub priority: Option<f64>,
    #[serde(default, rename = "calculatedRTO")]
    pub calculated_rto: Option<f64>,
}

impl From<UpdateCriticalSystemRequest> for CriticalSystem {
    fn from(req: UpdateCriticalSystemRequest) -> Self {
        Self {
            system: req.system,
            max_downtime: req.max_downtime,
            recovery_buffer: req.recovery_buffer,
            priority: req.priority,
            calculated_rto: req.calculated_rto,
            ..Default::default()
        }
    }
}

/// Body of PUT /update-rto. The rto is stored as sent.
#[derive(Debug, Deserialize)]
pub struct UpdateRtoRequest {
    pub system: String,
    #[serde(default)]
    pub mad: Option<f64>,
    #[serde(default)]
    pub buffer: Option<f64>,
    #[serde(default)]
    pub priority: Option<f64>,
    #[serde(default)]
    pub rto: Option<f64>,
}

impl From<UpdateRtoRequest> for CriticalSystem {
    fn from(req: UpdateRtoRequest) -> Self {
        Self {
            system: req.system,
            mad: req.mad,
            buffer: req.buffer,
            priority: req.priority,
            rto: req.rto,
            ..Default::default()
        }
    }
}
