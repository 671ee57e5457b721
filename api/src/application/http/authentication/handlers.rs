pub mod login;
pub mod register;

use allerscan_core::domain::user::{AuthenticatedUser, User};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
    pub user: UserResponse,
}

impl From<AuthenticatedUser> for TokenResponse {
    fn from(authenticated: AuthenticatedUser) -> Self {
        Self {
            token: authenticated.token,
            user: authenticated.user.into(),
        }
    }
}
