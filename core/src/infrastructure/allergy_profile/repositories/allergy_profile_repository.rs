use sea_orm::{
    ActiveValue::Set, DatabaseConnection, EntityTrait, sea_query::OnConflict,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        allergy_profile::{entities::AllergyProfile, ports::AllergyProfileRepository},
        common::entities::app_errors::CoreError,
    },
    entity::allergy_profiles::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresAllergyProfileRepository {
    pub db: DatabaseConnection,
}

impl PostgresAllergyProfileRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, CoreError> {
    serde_json::to_value(value).map_err(|e| {
        error!("Failed to serialize allergy profile column: {}", e);
        CoreError::InternalServerError
    })
}

fn to_active_model(profile: &AllergyProfile) -> Result<ActiveModel, CoreError> {
    Ok(ActiveModel {
        user_id: Set(profile.user_id),
        allergens: Set(to_json(&profile.allergens)?),
        custom_allergens: Set(to_json(&profile.custom_allergens)?),
        severity_levels: Set(to_json(&profile.severity_levels)?),
        updated_at: Set(profile.updated_at.fixed_offset()),
    })
}

impl AllergyProfileRepository for PostgresAllergyProfileRepository {
    async fn get_by_user_id(&self, user_id: Uuid) -> Result<Option<AllergyProfile>, CoreError> {
        let profile = Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get allergy profile: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(profile.map(AllergyProfile::from))
    }

    async fn create_if_absent(&self, profile: AllergyProfile) -> Result<AllergyProfile, CoreError> {
        let user_id = profile.user_id;

        Entity::insert(to_active_model(&profile)?)
            .on_conflict(OnConflict::column(Column::UserId).do_nothing().to_owned())
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create allergy profile: {}", e);
                CoreError::InternalServerError
            })?;

        self.get_by_user_id(user_id).await?.ok_or_else(|| {
            error!(user_id = %user_id, "allergy profile missing after insert");
            CoreError::InternalServerError
        })
    }

    async fn upsert(&self, profile: AllergyProfile) -> Result<AllergyProfile, CoreError> {
        let stored = Entity::insert(to_active_model(&profile)?)
            .on_conflict(
                OnConflict::column(Column::UserId)
                    .update_columns([
                        Column::Allergens,
                        Column::CustomAllergens,
                        Column::SeverityLevels,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to upsert allergy profile: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(AllergyProfile::from(stored))
    }
}
