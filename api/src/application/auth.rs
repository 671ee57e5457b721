use allerscan_core::domain::authentication::{ports::AuthService, value_objects::Identity};
use axum::{
    RequestPartsExt,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use tracing::debug;

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Result<String, ApiError> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| ApiError::Unauthorized("Token not found".to_string()))?;

    Ok(bearer.token().to_string())
}

/// Identity of the caller, resolved from the `Authorization: Bearer` header.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>().copied() {
            return Ok(RequiredIdentity(identity));
        }

        let token = extract_token_from_bearer(parts).await?;
        let state = AppState::from_ref(state);

        let identity = state.service.authorize_request(&token).map_err(|e| {
            debug!("rejected bearer token: {}", e);
            ApiError::from(e)
        })?;

        parts.extensions.insert(identity);

        Ok(RequiredIdentity(identity))
    }
}
