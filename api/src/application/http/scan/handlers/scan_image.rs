use allerscan_core::domain::scan::{ImageScanInput, LabelImage, ScanService};
use axum::extract::{Multipart, State};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        scan::handlers::ScanResultResponse,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024;

#[utoipa::path(
    post,
    path = "/scan/image",
    tag = "scan",
    summary = "Check a label photo against the caller's allergens",
    description = "Multipart upload with a single `image` field (image/*, at most 10 MiB)",
    responses(
        (status = 200, body = ScanResultResponse),
        (status = 400, description = "Missing, oversized or non-image upload"),
        (status = 404, description = "Allergy profile not found"),
        (status = 500, description = "Failed to analyze image")
    ),
    security(("bearer" = []))
)]
pub async fn scan_image(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    mut multipart: Multipart,
) -> Result<Response<ScanResultResponse>, ApiError> {
    let mut image: Option<LabelImage> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let mime_type = field.content_type().unwrap_or_default().to_string();
        if !mime_type.starts_with("image/") {
            return Err(ApiError::BadRequest("File must be an image".to_string()));
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

        if data.len() > MAX_IMAGE_SIZE {
            return Err(ApiError::BadRequest(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_SIZE
            )));
        }

        image = Some(LabelImage {
            data: data.to_vec(),
            mime_type,
        });
    }

    let image = image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let record = state
        .service
        .scan_image(identity, ImageScanInput { image })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(record.into()))
}
