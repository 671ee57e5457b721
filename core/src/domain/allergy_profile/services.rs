use tracing::{debug, info};

use crate::domain::{
    allergy_profile::{
        entities::AllergyProfile,
        ports::{AllergyProfileRepository, AllergyProfileService},
        value_objects::UpdateAllergyProfileInput,
    },
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    jwt::ports::JwtSigner,
    scan::ports::{LabelTranscriber, ScanRepository},
    user::ports::UserRepository,
};

impl<U, H, J, AP, SR, LT> AllergyProfileService for Service<U, H, J, AP, SR, LT>
where
    U: UserRepository,
    H: HasherRepository,
    J: JwtSigner,
    AP: AllergyProfileRepository,
    SR: ScanRepository,
    LT: LabelTranscriber,
{
    async fn get_profile(&self, identity: Identity) -> Result<AllergyProfile, CoreError> {
        if let Some(profile) = self
            .allergy_profile_repository
            .get_by_user_id(identity.id())
            .await?
        {
            return Ok(profile);
        }

        debug!(user_id = %identity.id(), "creating missing allergy profile");

        self.allergy_profile_repository
            .create_if_absent(AllergyProfile::empty(identity.id()))
            .await
    }

    async fn update_profile(
        &self,
        identity: Identity,
        input: UpdateAllergyProfileInput,
    ) -> Result<AllergyProfile, CoreError> {
        let mut profile = AllergyProfile::empty(identity.id());
        profile.replace(
            input.allergens,
            input.custom_allergens,
            input.severity_levels,
        );

        let profile = self.allergy_profile_repository.upsert(profile).await?;

        info!(
            user_id = %identity.id(),
            allergens = profile.allergens.len(),
            custom_allergens = profile.custom_allergens.len(),
            "allergy profile updated"
        );

        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use uuid::Uuid;

    use crate::domain::{
        allergy_profile::{
            entities::AllergyProfile,
            ports::{AllergyProfileRepository, AllergyProfileService},
            value_objects::UpdateAllergyProfileInput,
        },
        authentication::value_objects::Identity,
        testing::{
            InMemoryUserRepository, StaleReadAllergyProfileRepository, service_with,
            test_service,
        },
    };

    #[tokio::test]
    async fn test_get_profile_creates_missing_profile() {
        let service = test_service();
        let identity = Identity::new(Uuid::new_v4());

        let profile = service.get_profile(identity).await.unwrap();

        assert_eq!(profile.user_id, identity.id());
        assert!(profile.allergens.is_empty());
        assert!(
            service
                .allergy_profile_repository
                .get_by_user_id(identity.id())
                .await
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_update_profile_replaces_wholesale() {
        let service = test_service();
        let identity = Identity::new(Uuid::new_v4());

        service
            .update_profile(
                identity,
                UpdateAllergyProfileInput {
                    allergens: vec!["peanuts".to_string(), "dairy".to_string()],
                    custom_allergens: vec!["coconut".to_string()],
                    severity_levels: BTreeMap::from([(
                        "peanuts".to_string(),
                        "severe".to_string(),
                    )]),
                },
            )
            .await
            .unwrap();

        let updated = service
            .update_profile(
                identity,
                UpdateAllergyProfileInput {
                    allergens: vec!["soy".to_string()],
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.allergens, vec!["soy"]);
        assert!(updated.custom_allergens.is_empty());
        assert!(updated.severity_levels.is_empty());

        let stored = service.get_profile(identity).await.unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_get_profile_never_overwrites_a_concurrent_write() {
        let profiles = StaleReadAllergyProfileRepository::default();
        let identity = Identity::new(Uuid::new_v4());

        let mut written = AllergyProfile::empty(identity.id());
        written.replace(
            vec!["peanuts".to_string()],
            vec!["coconut".to_string()],
            BTreeMap::new(),
        );
        profiles.inner.upsert(written.clone()).await.unwrap();

        let service = service_with(InMemoryUserRepository::default(), profiles.clone());
        let profile = service.get_profile(identity).await.unwrap();

        assert_eq!(profile, written);
        assert_eq!(
            profiles.inner.get_by_user_id(identity.id()).await.unwrap(),
            Some(written)
        );
    }
}
