use allerscan_core::domain::allergy_profile::{
    AllergyProfile, AllergyProfileService, value_objects::UpdateAllergyProfileInput,
};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        allergy_profile::validators::UpdateAllergyProfileRequest,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateAllergyProfileResponse {
    pub message: String,
    pub profile: AllergyProfile,
}

#[utoipa::path(
    put,
    path = "",
    tag = "profile",
    summary = "Replace the caller's allergy profile",
    responses(
        (status = 200, body = UpdateAllergyProfileResponse),
        (status = 400, description = "Invalid body"),
        (status = 401, description = "Missing or invalid token")
    ),
    request_body = UpdateAllergyProfileRequest,
    security(("bearer" = []))
)]
pub async fn update_profile(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateAllergyProfileRequest>,
) -> Result<Response<UpdateAllergyProfileResponse>, ApiError> {
    let profile = state
        .service
        .update_profile(
            identity,
            UpdateAllergyProfileInput {
                allergens: payload.allergens,
                custom_allergens: payload.custom_allergens,
                severity_levels: payload.severity_levels,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateAllergyProfileResponse {
        message: "Profile updated successfully".to_string(),
        profile,
    }))
}
