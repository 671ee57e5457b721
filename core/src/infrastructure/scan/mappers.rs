use crate::{
    domain::{
        allergen::entities::VerdictSeverity,
        scan::entities::{ScanMethod, ScanRecord},
    },
    entity::scanned_products,
};

impl From<&scanned_products::Model> for ScanRecord {
    fn from(model: &scanned_products::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            product_name: model.product_name.clone(),
            ingredients: serde_json::from_value(model.ingredients.clone()).unwrap_or_default(),
            allergens_detected: serde_json::from_value(model.allergens_detected.clone())
                .unwrap_or_default(),
            severity: VerdictSeverity::from(model.severity.as_str()),
            safe: model.safe,
            details: serde_json::from_value(model.details.clone()).unwrap_or_default(),
            scan_type: ScanMethod::from(model.scan_type.as_str()),
            notes: model.notes.clone(),
            timestamp: model.timestamp.to_utc(),
        }
    }
}

impl From<scanned_products::Model> for ScanRecord {
    fn from(model: scanned_products::Model) -> Self {
        Self::from(&model)
    }
}
