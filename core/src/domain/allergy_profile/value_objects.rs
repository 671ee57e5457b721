use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct UpdateAllergyProfileInput {
    pub allergens: Vec<String>,
    pub custom_allergens: Vec<String>,
    pub severity_levels: BTreeMap<String, String>,
}
