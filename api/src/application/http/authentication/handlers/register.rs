use allerscan_core::domain::user::{AccountService, RegisterUserInput};
use axum::extract::State;

use crate::application::http::{
    authentication::{handlers::TokenResponse, validators::RegisterRequest},
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    summary = "Register a new account",
    description = "Creates an account with an empty allergy profile and returns a bearer token",
    responses(
        (status = 200, body = TokenResponse),
        (status = 400, description = "Email already registered or invalid body")
    ),
    request_body = RegisterRequest
)]
pub async fn register(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RegisterRequest>,
) -> Result<Response<TokenResponse>, ApiError> {
    let authenticated = state
        .service
        .register(RegisterUserInput {
            email: payload.email,
            password: payload.password,
            name: payload.name,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(authenticated.into()))
}
