use crate::domain::allergen::detector::AllergenDetector;

/// Aggregate that implements every domain service over its ports.
#[derive(Clone)]
pub struct Service<U, H, J, AP, SR, LT> {
    pub(crate) user_repository: U,
    pub(crate) hasher_repository: H,
    pub(crate) jwt_signer: J,
    pub(crate) allergy_profile_repository: AP,
    pub(crate) scan_repository: SR,
    pub(crate) label_transcriber: LT,
    pub(crate) allergen_detector: AllergenDetector,
}

impl<U, H, J, AP, SR, LT> Service<U, H, J, AP, SR, LT> {
    pub fn new(
        user_repository: U,
        hasher_repository: H,
        jwt_signer: J,
        allergy_profile_repository: AP,
        scan_repository: SR,
        label_transcriber: LT,
        allergen_detector: AllergenDetector,
    ) -> Self {
        Self {
            user_repository,
            hasher_repository,
            jwt_signer,
            allergy_profile_repository,
            scan_repository,
            label_transcriber,
            allergen_detector,
        }
    }
}
