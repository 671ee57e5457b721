pub mod get_history;
pub mod scan_image;
pub mod scan_manual;

use std::collections::BTreeMap;

use allerscan_core::domain::{
    allergen::{SeverityTier, VerdictSeverity},
    scan::ScanRecord,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Body returned by both scan endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScanResultResponse {
    pub scan_id: Uuid,
    pub product_name: String,
    pub ingredients: Vec<String>,
    pub allergens_detected: Vec<String>,
    pub severity: VerdictSeverity,
    pub safe: bool,
    pub details: BTreeMap<String, SeverityTier>,
}

impl From<ScanRecord> for ScanResultResponse {
    fn from(record: ScanRecord) -> Self {
        Self {
            scan_id: record.id,
            product_name: record.product_name,
            ingredients: record.ingredients,
            allergens_detected: record.allergens_detected,
            severity: record.severity,
            safe: record.safe,
            details: record.details,
        }
    }
}
