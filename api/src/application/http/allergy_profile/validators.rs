use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

fn validate_severity_levels(levels: &BTreeMap<String, String>) -> Result<(), ValidationError> {
    if levels
        .values()
        .all(|level| matches!(level.as_str(), "mild" | "moderate" | "severe"))
    {
        Ok(())
    } else {
        Err(ValidationError::new("severity_level")
            .with_message("severity levels must be mild, moderate or severe".into()))
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateAllergyProfileRequest {
    #[schema(example = json!(["peanuts", "dairy"]))]
    pub allergens: Vec<String>,
    #[serde(default)]
    #[validate(length(max = 100, message = "at most 100 custom allergens"))]
    pub custom_allergens: Vec<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_severity_levels"))]
    pub severity_levels: BTreeMap<String, String>,
}
