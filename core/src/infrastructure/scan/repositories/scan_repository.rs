use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        scan::{
            entities::ScanRecord, ports::ScanRepository, value_objects::ScanHistoryFilter,
        },
    },
    entity::scanned_products::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresScanRepository {
    pub db: DatabaseConnection,
}

impl PostgresScanRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, CoreError> {
    serde_json::to_value(value).map_err(|e| {
        error!("Failed to serialize scan column: {}", e);
        CoreError::InternalServerError
    })
}

impl ScanRepository for PostgresScanRepository {
    async fn create_scan(&self, record: ScanRecord) -> Result<ScanRecord, CoreError> {
        let active_model = ActiveModel {
            id: Set(record.id),
            user_id: Set(record.user_id),
            product_name: Set(record.product_name.clone()),
            ingredients: Set(to_json(&record.ingredients)?),
            allergens_detected: Set(to_json(&record.allergens_detected)?),
            details: Set(to_json(&record.details)?),
            severity: Set(record.severity.as_str().to_string()),
            safe: Set(record.safe),
            scan_type: Set(record.scan_type.as_str().to_string()),
            notes: Set(record.notes.clone()),
            timestamp: Set(record.timestamp.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create scan record: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(ScanRecord::from(created))
    }

    async fn get_by_user(
        &self,
        user_id: Uuid,
        filter: ScanHistoryFilter,
    ) -> Result<Vec<ScanRecord>, CoreError> {
        let records = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::Timestamp)
            .order_by_desc(Column::Id)
            .offset(filter.offset)
            .limit(filter.limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get scan history: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(records.into_iter().map(ScanRecord::from).collect())
    }
}
