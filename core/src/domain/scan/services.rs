use tracing::{error, info};

use crate::domain::{
    allergen::parser::parse_ingredients,
    allergy_profile::{entities::AllergyProfile, ports::AllergyProfileRepository},
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    jwt::ports::JwtSigner,
    scan::{
        entities::{ScanMethod, ScanRecord},
        helpers::{LabelTranscript, transcription_notes},
        ports::{LabelTranscriber, ScanRepository, ScanService},
        value_objects::{GetScanHistoryInput, ImageScanInput, ManualScanInput},
    },
    user::ports::UserRepository,
};

impl<U, H, J, AP, SR, LT> Service<U, H, J, AP, SR, LT>
where
    U: UserRepository,
    H: HasherRepository,
    J: JwtSigner,
    AP: AllergyProfileRepository,
    SR: ScanRepository,
    LT: LabelTranscriber,
{
    async fn require_profile(&self, identity: &Identity) -> Result<AllergyProfile, CoreError> {
        self.allergy_profile_repository
            .get_by_user_id(identity.id())
            .await?
            .ok_or(CoreError::AllergyProfileNotFound)
    }

    async fn record_scan(
        &self,
        identity: &Identity,
        profile: &AllergyProfile,
        product_name: String,
        ingredients_text: &str,
        method: ScanMethod,
        notes: Option<String>,
    ) -> Result<ScanRecord, CoreError> {
        let ingredients = parse_ingredients(ingredients_text);
        let verdict = self.allergen_detector.detect(
            &ingredients,
            &profile.allergens,
            &profile.custom_allergens,
        );

        info!(
            user_id = %identity.id(),
            method = method.as_str(),
            ingredients = ingredients.len(),
            detected = ?verdict.detected,
            severity = verdict.severity.as_str(),
            "scan classified"
        );

        let record = ScanRecord::new(
            identity.id(),
            product_name,
            ingredients,
            verdict,
            method,
            notes,
        );

        self.scan_repository.create_scan(record).await
    }
}

impl<U, H, J, AP, SR, LT> ScanService for Service<U, H, J, AP, SR, LT>
where
    U: UserRepository,
    H: HasherRepository,
    J: JwtSigner,
    AP: AllergyProfileRepository,
    SR: ScanRepository,
    LT: LabelTranscriber,
{
    async fn scan_manual(
        &self,
        identity: Identity,
        input: ManualScanInput,
    ) -> Result<ScanRecord, CoreError> {
        let profile = self.require_profile(&identity).await?;

        self.record_scan(
            &identity,
            &profile,
            input.product_name,
            &input.ingredients,
            ScanMethod::Manual,
            None,
        )
        .await
    }

    async fn scan_image(
        &self,
        identity: Identity,
        input: ImageScanInput,
    ) -> Result<ScanRecord, CoreError> {
        let profile = self.require_profile(&identity).await?;

        let transcription = self
            .label_transcriber
            .transcribe_label(input.image)
            .await
            .map_err(|e| {
                error!(user_id = %identity.id(), "label transcription failed: {}", e);
                e
            })?;

        let transcript = LabelTranscript::parse(&transcription);

        self.record_scan(
            &identity,
            &profile,
            transcript.product_name,
            transcript.ingredients_text,
            ScanMethod::Image,
            Some(transcription_notes(&transcription)),
        )
        .await
    }

    async fn get_history(
        &self,
        identity: Identity,
        input: GetScanHistoryInput,
    ) -> Result<Vec<ScanRecord>, CoreError> {
        self.scan_repository
            .get_by_user(identity.id(), input.into())
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use uuid::Uuid;

    use crate::domain::{
        allergen::entities::{SeverityTier, VerdictSeverity},
        allergy_profile::{ports::AllergyProfileService, value_objects::UpdateAllergyProfileInput},
        authentication::value_objects::Identity,
        common::entities::app_errors::CoreError,
        scan::{
            entities::ScanMethod,
            ports::ScanService,
            value_objects::{GetScanHistoryInput, ImageScanInput, LabelImage, ManualScanInput},
        },
        testing::{TestService, test_service, test_service_with_transcription},
    };

    async fn with_profile(service: &TestService, allergens: &[&str], custom: &[&str]) -> Identity {
        let identity = Identity::new(Uuid::new_v4());
        service
            .update_profile(
                identity,
                UpdateAllergyProfileInput {
                    allergens: allergens.iter().map(|a| a.to_string()).collect(),
                    custom_allergens: custom.iter().map(|c| c.to_string()).collect(),
                    severity_levels: BTreeMap::new(),
                },
            )
            .await
            .unwrap();
        identity
    }

    fn label() -> ImageScanInput {
        ImageScanInput {
            image: LabelImage {
                data: vec![0xFF, 0xD8, 0xFF],
                mime_type: "image/jpeg".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_scan_manual_persists_verdict() {
        let service = test_service();
        let identity = with_profile(&service, &["peanuts", "mustard"], &["coconut"]).await;

        let record = service
            .scan_manual(
                identity,
                ManualScanInput {
                    product_name: "Trail Mix".to_string(),
                    ingredients: "roasted peanuts, raisins;; coconut flakes\nsalt".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(
            record.ingredients,
            vec!["roasted peanuts", "raisins", "coconut flakes", "salt"]
        );
        assert_eq!(record.allergens_detected, vec!["peanuts", "coconut"]);
        assert_eq!(record.details.get("coconut"), Some(&SeverityTier::Medium));
        assert_eq!(record.severity, VerdictSeverity::Severe);
        assert!(!record.safe);
        assert_eq!(record.scan_type, ScanMethod::Manual);
        assert_eq!(record.notes, None);

        let history = service
            .get_history(identity, GetScanHistoryInput::default())
            .await
            .unwrap();
        assert_eq!(history, vec![record]);
    }

    #[tokio::test]
    async fn test_scan_manual_requires_profile() {
        let service = test_service();

        let result = service
            .scan_manual(
                Identity::new(Uuid::new_v4()),
                ManualScanInput {
                    product_name: "Bread".to_string(),
                    ingredients: "wheat flour".to_string(),
                },
            )
            .await;

        assert_eq!(result, Err(CoreError::AllergyProfileNotFound));
    }

    #[tokio::test]
    async fn test_scan_image_uses_transcription() {
        let service = test_service_with_transcription(Ok(
            "PRODUCT: Pesto Genovese\nINGREDIENTS: basil, cashew nuts, parmesan cheese".to_string(),
        ));
        let identity = with_profile(&service, &["tree_nuts", "dairy", "durian"], &[]).await;

        let record = service.scan_image(identity, label()).await.unwrap();

        assert_eq!(record.product_name, "Pesto Genovese");
        assert_eq!(record.ingredients, vec!["basil", "cashew nuts", "parmesan cheese"]);
        assert_eq!(record.allergens_detected, vec!["tree_nuts", "dairy"]);
        assert_eq!(record.severity, VerdictSeverity::Severe);
        assert_eq!(record.scan_type, ScanMethod::Image);
        assert!(
            record
                .notes
                .as_deref()
                .is_some_and(|n| n.starts_with("AI Analysis: PRODUCT: Pesto"))
        );
    }

    #[tokio::test]
    async fn test_scan_image_safe_product() {
        let service = test_service_with_transcription(Ok("water, sugar, lemon juice".to_string()));
        let identity = with_profile(&service, &["peanuts"], &[]).await;

        let record = service.scan_image(identity, label()).await.unwrap();

        assert_eq!(record.product_name, "Unknown Product");
        assert!(record.safe);
        assert_eq!(record.severity, VerdictSeverity::Safe);
        assert!(record.allergens_detected.is_empty());
    }

    #[tokio::test]
    async fn test_scan_image_transcription_failure_is_not_recorded() {
        let service = test_service_with_transcription(Err(CoreError::ExternalServiceError(
            "quota exceeded".to_string(),
        )));
        let identity = with_profile(&service, &["peanuts"], &[]).await;

        let result = service.scan_image(identity, label()).await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
        let history = service
            .get_history(identity, GetScanHistoryInput::default())
            .await
            .unwrap();
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn test_history_is_newest_first_and_scoped_to_user() {
        let service = test_service();
        let identity = with_profile(&service, &[], &[]).await;
        let other = with_profile(&service, &[], &[]).await;

        for product in ["first", "second", "third"] {
            service
                .scan_manual(
                    identity,
                    ManualScanInput {
                        product_name: product.to_string(),
                        ingredients: "water".to_string(),
                    },
                )
                .await
                .unwrap();
        }
        service
            .scan_manual(
                other,
                ManualScanInput {
                    product_name: "foreign".to_string(),
                    ingredients: "water".to_string(),
                },
            )
            .await
            .unwrap();

        let history = service
            .get_history(identity, GetScanHistoryInput::default())
            .await
            .unwrap();
        let names: Vec<_> = history.iter().map(|r| r.product_name.as_str()).collect();
        assert_eq!(names, vec!["third", "second", "first"]);

        let page = service
            .get_history(
                identity,
                GetScanHistoryInput {
                    offset: Some(1),
                    limit: Some(1),
                },
            )
            .await
            .unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].product_name, "second");
    }
}
