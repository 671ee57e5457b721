use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    jwt::entities::{Jwt, JwtClaim},
};

#[cfg_attr(test, mockall::automock)]
pub trait JwtSigner: Send + Sync {
    fn sign(&self, user_id: Uuid) -> Result<Jwt, CoreError>;

    fn verify(&self, token: &str) -> Result<JwtClaim, CoreError>;
}
