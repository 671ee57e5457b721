use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use uuid::Uuid;

use crate::{
    domain::{
        allergen::{detector::AllergenDetector, entities::AllergenReferenceTable},
        allergy_profile::{entities::AllergyProfile, ports::AllergyProfileRepository},
        common::{entities::app_errors::CoreError, services::Service},
        crypto::ports::HasherRepository,
        scan::{
            entities::ScanRecord,
            ports::{LabelTranscriber, ScanRepository},
            value_objects::{LabelImage, ScanHistoryFilter},
        },
        user::{
            entities::{User, UserCredential},
            ports::UserRepository,
        },
    },
    infrastructure::jwt::Hs256JwtSigner,
};

pub(crate) type TestService = Service<
    InMemoryUserRepository,
    PlainHasher,
    Hs256JwtSigner,
    InMemoryAllergyProfileRepository,
    InMemoryScanRepository,
    StubLabelTranscriber,
>;

pub(crate) fn test_service() -> TestService {
    test_service_with_transcription(Ok(String::new()))
}

pub(crate) fn test_service_with_transcription(
    transcription: Result<String, CoreError>,
) -> TestService {
    Service::new(
        InMemoryUserRepository::default(),
        PlainHasher,
        Hs256JwtSigner::new("test-secret".to_string(), 7),
        InMemoryAllergyProfileRepository::default(),
        InMemoryScanRepository::default(),
        StubLabelTranscriber { transcription },
        AllergenDetector::new(AllergenReferenceTable::standard()),
    )
}

/// Service over caller-supplied user and profile repositories.
pub(crate) fn service_with<U, AP>(
    users: U,
    profiles: AP,
) -> Service<U, PlainHasher, Hs256JwtSigner, AP, InMemoryScanRepository, StubLabelTranscriber>
where
    U: UserRepository,
    AP: AllergyProfileRepository,
{
    Service::new(
        users,
        PlainHasher,
        Hs256JwtSigner::new("test-secret".to_string(), 7),
        profiles,
        InMemoryScanRepository::default(),
        StubLabelTranscriber {
            transcription: Ok(String::new()),
        },
        AllergenDetector::new(AllergenReferenceTable::standard()),
    )
}

#[derive(Clone, Default)]
pub(crate) struct InMemoryUserRepository {
    users: Arc<Mutex<Vec<UserCredential>>>,
}

impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, user: User, password_hash: String) -> Result<User, CoreError> {
        let mut users = self.users.lock().map_err(|_| CoreError::InternalServerError)?;
        if users.iter().any(|c| c.user.email == user.email) {
            return Err(CoreError::AlreadyExists);
        }
        users.push(UserCredential {
            user: user.clone(),
            password_hash,
        });
        Ok(user)
    }

    async fn get_credential_by_email(
        &self,
        email: String,
    ) -> Result<Option<UserCredential>, CoreError> {
        let users = self.users.lock().map_err(|_| CoreError::InternalServerError)?;
        Ok(users.iter().find(|c| c.user.email == email).cloned())
    }
}

#[derive(Clone)]
pub(crate) struct PlainHasher;

impl HasherRepository for PlainHasher {
    async fn hash_password(&self, password: String) -> Result<String, CoreError> {
        Ok(format!("plain:{password}"))
    }

    async fn verify_password(
        &self,
        password: String,
        password_hash: String,
    ) -> Result<bool, CoreError> {
        Ok(password_hash == format!("plain:{password}"))
    }
}

#[derive(Clone, Default)]
pub(crate) struct InMemoryAllergyProfileRepository {
    profiles: Arc<Mutex<HashMap<Uuid, AllergyProfile>>>,
}

impl AllergyProfileRepository for InMemoryAllergyProfileRepository {
    async fn get_by_user_id(&self, user_id: Uuid) -> Result<Option<AllergyProfile>, CoreError> {
        let profiles = self
            .profiles
            .lock()
            .map_err(|_| CoreError::InternalServerError)?;
        Ok(profiles.get(&user_id).cloned())
    }

    async fn create_if_absent(&self, profile: AllergyProfile) -> Result<AllergyProfile, CoreError> {
        let mut profiles = self
            .profiles
            .lock()
            .map_err(|_| CoreError::InternalServerError)?;
        Ok(profiles.entry(profile.user_id).or_insert(profile).clone())
    }

    async fn upsert(&self, profile: AllergyProfile) -> Result<AllergyProfile, CoreError> {
        let mut profiles = self
            .profiles
            .lock()
            .map_err(|_| CoreError::InternalServerError)?;
        profiles.insert(profile.user_id, profile.clone());
        Ok(profile)
    }
}

/// Reads miss every stored profile, as if a concurrent write landed right after the read.
#[derive(Clone, Default)]
pub(crate) struct StaleReadAllergyProfileRepository {
    pub(crate) inner: InMemoryAllergyProfileRepository,
}

impl AllergyProfileRepository for StaleReadAllergyProfileRepository {
    async fn get_by_user_id(&self, _user_id: Uuid) -> Result<Option<AllergyProfile>, CoreError> {
        Ok(None)
    }

    async fn create_if_absent(&self, profile: AllergyProfile) -> Result<AllergyProfile, CoreError> {
        self.inner.create_if_absent(profile).await
    }

    async fn upsert(&self, profile: AllergyProfile) -> Result<AllergyProfile, CoreError> {
        self.inner.upsert(profile).await
    }
}

/// Email lookups always miss, so only the insert can catch a duplicate.
#[derive(Clone, Default)]
pub(crate) struct StaleReadUserRepository {
    pub(crate) inner: InMemoryUserRepository,
}

impl UserRepository for StaleReadUserRepository {
    async fn create_user(&self, user: User, password_hash: String) -> Result<User, CoreError> {
        self.inner.create_user(user, password_hash).await
    }

    async fn get_credential_by_email(
        &self,
        _email: String,
    ) -> Result<Option<UserCredential>, CoreError> {
        Ok(None)
    }
}

#[derive(Clone, Default)]
pub(crate) struct InMemoryScanRepository {
    records: Arc<Mutex<Vec<ScanRecord>>>,
}

impl ScanRepository for InMemoryScanRepository {
    async fn create_scan(&self, record: ScanRecord) -> Result<ScanRecord, CoreError> {
        let mut records = self.records.lock().map_err(|_| CoreError::InternalServerError)?;
        records.push(record.clone());
        Ok(record)
    }

    async fn get_by_user(
        &self,
        user_id: Uuid,
        filter: ScanHistoryFilter,
    ) -> Result<Vec<ScanRecord>, CoreError> {
        let records = self.records.lock().map_err(|_| CoreError::InternalServerError)?;
        Ok(records
            .iter()
            .rev()
            .filter(|r| r.user_id == user_id)
            .skip(filter.offset as usize)
            .take(filter.limit as usize)
            .cloned()
            .collect())
    }
}

#[derive(Clone)]
pub(crate) struct StubLabelTranscriber {
    transcription: Result<String, CoreError>,
}

impl LabelTranscriber for StubLabelTranscriber {
    async fn transcribe_label(&self, _image: LabelImage) -> Result<String, CoreError> {
        self.transcription.clone()
    }
}
