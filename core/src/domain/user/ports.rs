use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{
        entities::{User, UserCredential},
        value_objects::{AuthenticatedUser, LoginInput, RegisterUserInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn create_user(
        &self,
        user: User,
        password_hash: String,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn get_credential_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Option<UserCredential>, CoreError>> + Send;
}

pub trait AccountService: Send + Sync {
    fn register(
        &self,
        input: RegisterUserInput,
    ) -> impl Future<Output = Result<AuthenticatedUser, CoreError>> + Send;

    fn login(
        &self,
        input: LoginInput,
    ) -> impl Future<Output = Result<AuthenticatedUser, CoreError>> + Send;
}
