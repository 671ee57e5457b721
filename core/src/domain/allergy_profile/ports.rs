use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    allergy_profile::{entities::AllergyProfile, value_objects::UpdateAllergyProfileInput},
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
};

#[cfg_attr(test, mockall::automock)]
pub trait AllergyProfileRepository: Send + Sync {
    fn get_by_user_id(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<AllergyProfile>, CoreError>> + Send;

    /// Insert `profile` unless one exists, then return whatever is stored.
    /// An existing profile is never modified.
    fn create_if_absent(
        &self,
        profile: AllergyProfile,
    ) -> impl Future<Output = Result<AllergyProfile, CoreError>> + Send;

    /// Insert or fully replace the profile of `profile.user_id`.
    fn upsert(
        &self,
        profile: AllergyProfile,
    ) -> impl Future<Output = Result<AllergyProfile, CoreError>> + Send;
}

pub trait AllergyProfileService: Send + Sync {
    fn get_profile(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<AllergyProfile, CoreError>> + Send;

    fn update_profile(
        &self,
        identity: Identity,
        input: UpdateAllergyProfileInput,
    ) -> impl Future<Output = Result<AllergyProfile, CoreError>> + Send;
}
