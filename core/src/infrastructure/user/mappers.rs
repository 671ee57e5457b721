use crate::{
    domain::user::entities::{User, UserCredential},
    entity::users,
};

impl From<&users::Model> for User {
    fn from(model: &users::Model) -> Self {
        Self {
            id: model.id,
            email: model.email.clone(),
            name: model.name.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self::from(&model)
    }
}

impl From<users::Model> for UserCredential {
    fn from(model: users::Model) -> Self {
        Self {
            user: User::from(&model),
            password_hash: model.password_hash,
        }
    }
}
