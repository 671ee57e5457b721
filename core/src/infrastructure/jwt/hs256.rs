use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind,
};
use tracing::{debug, error};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    jwt::{
        entities::{Jwt, JwtClaim},
        ports::JwtSigner,
    },
};

#[derive(Clone)]
pub struct Hs256JwtSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl Hs256JwtSigner {
    pub fn new(secret: String, ttl_days: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::days(ttl_days),
        }
    }
}

impl JwtSigner for Hs256JwtSigner {
    fn sign(&self, user_id: Uuid) -> Result<Jwt, CoreError> {
        let now = Utc::now();
        let expires_at = now + self.ttl;

        let claims = JwtClaim {
            sub: user_id,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| {
                error!("Failed to sign token: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Jwt { token, expires_at })
    }

    fn verify(&self, token: &str) -> Result<JwtClaim, CoreError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<JwtClaim>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => CoreError::TokenExpired,
                _ => {
                    debug!("Rejected token: {}", e);
                    CoreError::InvalidToken
                }
            })
    }
}
