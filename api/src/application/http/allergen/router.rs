use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::get_common_allergens::{__path_get_common_allergens, get_common_allergens};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_common_allergens))]
pub struct AllergenApiDoc;

pub fn allergen_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/allergens/common", state.args.server.root_path),
        get(get_common_allergens),
    )
}
