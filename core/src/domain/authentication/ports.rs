use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
};

pub trait AuthService: Send + Sync {
    fn authorize_request(&self, token: &str) -> Result<Identity, CoreError>;
}
