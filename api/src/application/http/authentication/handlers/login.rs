use allerscan_core::domain::user::{AccountService, LoginInput};
use axum::extract::State;

use crate::application::http::{
    authentication::{handlers::TokenResponse, validators::LoginRequest},
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
    path = "/login",
    tag = "auth",
    summary = "Log in",
    responses(
        (status = 200, body = TokenResponse),
        (status = 401, description = "Invalid credentials")
    ),
    request_body = LoginRequest
)]
pub async fn login(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LoginRequest>,
) -> Result<Response<TokenResponse>, ApiError> {
    let authenticated = state
        .service
        .login(LoginInput {
            email: payload.email,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(authenticated.into()))
}
