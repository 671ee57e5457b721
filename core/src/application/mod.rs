use tracing::info;

use crate::{
    domain::{
        allergen::{detector::AllergenDetector, entities::AllergenReferenceTable},
        common::{AllerScanConfig, services::Service},
    },
    infrastructure::{
        allergy_profile::PostgresAllergyProfileRepository,
        crypto::Argon2HasherRepository,
        db::postgres::{Postgres, PostgresConfig},
        jwt::Hs256JwtSigner,
        llm::GeminiLabelTranscriber,
        scan::PostgresScanRepository,
        user::PostgresUserRepository,
    },
};

pub type AllerScanService = Service<
    PostgresUserRepository,
    Argon2HasherRepository,
    Hs256JwtSigner,
    PostgresAllergyProfileRepository,
    PostgresScanRepository,
    GeminiLabelTranscriber,
>;

pub async fn create_service(config: AllerScanConfig) -> Result<AllerScanService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    let service = build_service(postgres.get_db(), &config);

    info!(
        allergens = service.allergen_detector.table().len(),
        model = %config.llm.gemini_model,
        "service initialized"
    );

    Ok(service)
}

/// Wire the service over an existing connection.
pub fn build_service(db: sea_orm::DatabaseConnection, config: &AllerScanConfig) -> AllerScanService {
    Service::new(
        PostgresUserRepository::new(db.clone()),
        Argon2HasherRepository::new(),
        Hs256JwtSigner::new(config.auth.jwt_secret.clone(), config.auth.token_ttl_days),
        PostgresAllergyProfileRepository::new(db.clone()),
        PostgresScanRepository::new(db),
        GeminiLabelTranscriber::new(
            config.llm.gemini_api_key.clone(),
            config.llm.gemini_model.clone(),
        ),
        AllergenDetector::new(AllergenReferenceTable::standard()),
    )
}
