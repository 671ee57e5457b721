use crate::domain::allergen::entities::Verdict;

pub trait AllergenService: Send + Sync {
    /// Identifiers of the reference table, in table order.
    fn common_allergens(&self) -> Vec<String>;

    fn detect_allergens(
        &self,
        ingredients: &[String],
        user_allergens: &[String],
        custom_allergens: &[String],
    ) -> Verdict;
}
