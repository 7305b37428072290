use bc_core::{BusinessUnit, SubFunction, Vendor};

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubFunctionRequest {
    pub name: String,
    #[serde(default)]
    pub problem_statement: Option<String>,
    #[serde(default)]
    pub department_id: Option<String>,
}

impl From<CreateSubFunctionRequest> for SubFunction {
    fn from(req: CreateSubFunctionRequest) -> Self {
        Self {
            name: req.name,
            problem_statement: req.problem_statement,
            department: req.department_id,
        }
    }
}

/// Patch body; absent fields are left untouched
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubFunctionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem_statement: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBusinessUnitRequest {
    pub name: String,
    #[serde(default)]
    pub target_sales: Option<f64>,
    #[serde(default)]
    pub time_period: Option<String>,
    #[serde(default)]
    pub department_id: Option<String>,
}

impl From<CreateBusinessUnitRequest> for BusinessUnit {
    fn from(req: CreateBusinessUnitRequest) -> Self {
        Self {
            name: req.name,
            target_sales: req.target_sales,
            time_period: req.time_period,
            department: req.department_id,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBusinessUnitRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_sales: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_period: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateVendorRequest {
    pub name: String,
    #[serde(default)]
    pub product: Option<String>,
}

impl From<CreateVendorRequest> for Vendor {
    fn from(req: CreateVendorRequest) -> Self {
        Self {
            name: req.name,
            product: req.product,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateVendorRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
}
