use crate::domain::{
    allergen::{entities::Verdict, ports::AllergenService},
    allergy_profile::ports::AllergyProfileRepository,
    common::services::Service,
    crypto::ports::HasherRepository,
    jwt::ports::JwtSigner,
    scan::ports::{LabelTranscriber, ScanRepository},
    user::ports::UserRepository,
};

impl<U, H, J, AP, SR, LT> AllergenService for Service<U, H, J, AP, SR, LT>
where
    U: UserRepository,
    H: HasherRepository,
    J: JwtSigner,
    AP: AllergyProfileRepository,
    SR: ScanRepository,
    LT: LabelTranscriber,
{
    fn common_allergens(&self) -> Vec<String> {
        self.allergen_detector.table().identifiers()
    }

    fn detect_allergens(
        &self,
        ingredients: &[String],
        user_allergens: &[String],
        custom_allergens: &[String],
    ) -> Verdict {
        self.allergen_detector
            .detect(ingredients, user_allergens, custom_allergens)
    }
}
