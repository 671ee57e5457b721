use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    get_history::{__path_get_history, get_history},
    scan_image::{__path_scan_image, MAX_IMAGE_SIZE, scan_image},
    scan_manual::{__path_scan_manual, scan_manual},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(scan_image, scan_manual, get_history))]
pub struct ScanApiDoc;

pub fn scan_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/scan/image", root_path),
            // multipart framing on top of the image itself
            post(scan_image).layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + 64 * 1024)),
        )
        .route(&format!("{}/scan/manual", root_path), post(scan_manual))
        .route(&format!("{}/history", root_path), get(get_history))
}
