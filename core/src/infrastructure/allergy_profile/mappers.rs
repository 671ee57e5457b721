use crate::{domain::allergy_profile::entities::AllergyProfile, entity::allergy_profiles};

impl From<&allergy_profiles::Model> for AllergyProfile {
    fn from(model: &allergy_profiles::Model) -> Self {
        Self {
            user_id: model.user_id,
            allergens: serde_json::from_value(model.allergens.clone()).unwrap_or_default(),
            custom_allergens: serde_json::from_value(model.custom_allergens.clone())
                .unwrap_or_default(),
            severity_levels: serde_json::from_value(model.severity_levels.clone())
                .unwrap_or_default(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<allergy_profiles::Model> for AllergyProfile {
    fn from(model: allergy_profiles::Model) -> Self {
        Self::from(&model)
    }
}
