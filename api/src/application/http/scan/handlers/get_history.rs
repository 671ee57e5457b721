use allerscan_core::domain::scan::{GetScanHistoryInput, ScanRecord, ScanService};
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        scan::validators::GetHistoryParams,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetHistoryResponse {
    pub scans: Vec<ScanRecord>,
    pub total: usize,
}

#[utoipa::path(
    get,
    path = "/history",
    tag = "scan",
    summary = "List the caller's past scans, newest first",
    responses(
        (status = 200, body = GetHistoryResponse)
    ),
    params(GetHistoryParams),
    security(("bearer" = []))
)]
pub async fn get_history(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Query(params): Query<GetHistoryParams>,
) -> Result<Response<GetHistoryResponse>, ApiError> {
    let scans = state
        .service
        .get_history(
            identity,
            GetScanHistoryInput {
                offset: params.offset,
                limit: params.limit,
            },
        )
        .await
        .map_err(ApiError::from)?;

    let total = scans.len();

    Ok(Response::OK(GetHistoryResponse { scans, total }))
}
