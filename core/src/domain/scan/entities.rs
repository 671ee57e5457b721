use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    allergen::entities::{SeverityTier, Verdict, VerdictSeverity},
    common::generate_timestamp,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScanRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_name: String,
    pub ingredients: Vec<String>,
    pub allergens_detected: Vec<String>,
    pub severity: VerdictSeverity,
    pub safe: bool,
    pub details: BTreeMap<String, SeverityTier>,
    pub scan_type: ScanMethod,
    pub notes: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScanMethod {
    Image,
    Manual,
}

impl ScanMethod {
    pub fn as_str(&self) -> &str {
        match self {
            ScanMethod::Image => "image",
            ScanMethod::Manual => "manual",
        }
    }
}

impl From<&str> for ScanMethod {
    fn from(s: &str) -> Self {
        match s {
            "image" => ScanMethod::Image,
            _ => ScanMethod::Manual,
        }
    }
}

impl ScanRecord {
    pub fn new(
        user_id: Uuid,
        product_name: String,
        ingredients: Vec<String>,
        verdict: Verdict,
        scan_type: ScanMethod,
        notes: Option<String>,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            product_name,
            ingredients,
            allergens_detected: verdict.detected,
            severity: verdict.severity,
            safe: verdict.safe,
            details: verdict.details,
            scan_type,
            notes,
            timestamp: now,
        }
    }

    pub fn verdict(&self) -> Verdict {
        Verdict {
            detected: self.allergens_detected.clone(),
            severity: self.severity,
            safe: self.safe,
            details: self.details.clone(),
        }
    }
}
