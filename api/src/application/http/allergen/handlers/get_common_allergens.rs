use allerscan_core::domain::allergen::ports::AllergenService;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CommonAllergensResponse {
    pub allergens: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/common",
    tag = "allergens",
    summary = "List the standard allergen identifiers",
    responses(
        (status = 200, body = CommonAllergensResponse)
    )
)]
pub async fn get_common_allergens(
    State(state): State<AppState>,
) -> Result<Response<CommonAllergensResponse>, ApiError> {
    Ok(Response::OK(CommonAllergensResponse {
        allergens: state.service.common_allergens(),
    }))
}
