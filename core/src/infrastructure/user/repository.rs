use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, SqlErr,
};
use tracing::{debug, error};

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        user::{
            entities::{User, UserCredential},
            ports::UserRepository,
        },
    },
    entity::users::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// A concurrent registration can pass the email lookup and still lose on `users.email UNIQUE`.
fn map_insert_error(e: DbErr) -> CoreError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = e.sql_err() {
        debug!("user insert hit unique constraint: {}", detail);
        return CoreError::AlreadyExists;
    }

    error!("Failed to create user: {}", e);
    CoreError::InternalServerError
}

impl UserRepository for PostgresUserRepository {
    async fn create_user(&self, user: User, password_hash: String) -> Result<User, CoreError> {
        let active_model = ActiveModel {
            id: Set(user.id),
            email: Set(user.email.clone()),
            name: Set(user.name.clone()),
            password_hash: Set(password_hash),
            created_at: Set(user.created_at.fixed_offset()),
            updated_at: Set(user.updated_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(map_insert_error)?;

        Ok(User::from(created))
    }

    async fn get_credential_by_email(
        &self,
        email: String,
    ) -> Result<Option<UserCredential>, CoreError> {
        let user = Entity::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by email: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(user.map(UserCredential::from))
    }
}
