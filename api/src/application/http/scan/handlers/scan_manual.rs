use allerscan_core::domain::scan::{ManualScanInput, ScanService};
use axum::extract::State;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        scan::{handlers::ScanResultResponse, validators::ManualScanRequest},
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "/scan/manual",
    tag = "scan",
    summary = "Check typed ingredients against the caller's allergens",
    responses(
        (status = 200, body = ScanResultResponse),
        (status = 400, description = "Invalid body"),
        (status = 404, description = "Allergy profile not found")
    ),
    request_body = ManualScanRequest,
    security(("bearer" = []))
)]
pub async fn scan_manual(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<ManualScanRequest>,
) -> Result<Response<ScanResultResponse>, ApiError> {
    let record = state
        .service
        .scan_manual(
            identity,
            ManualScanInput {
                product_name: payload.product_name,
                ingredients: payload.ingredients,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(record.into()))
}
