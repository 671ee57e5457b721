use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AllergyProfile {
    pub user_id: Uuid,
    pub allergens: Vec<String>,
    pub custom_allergens: Vec<String>,
    /// User overrides ('mild' | 'moderate' | 'severe'); stored, not used for detection.
    pub severity_levels: BTreeMap<String, String>,
    pub updated_at: DateTime<Utc>,
}

impl AllergyProfile {
    pub fn empty(user_id: Uuid) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            user_id,
            allergens: Vec::new(),
            custom_allergens: Vec::new(),
            severity_levels: BTreeMap::new(),
            updated_at: now,
        }
    }

    /// Replace every selection at once.
    pub fn replace(
        &mut self,
        allergens: Vec<String>,
        custom_allergens: Vec<String>,
        severity_levels: BTreeMap<String, String>,
    ) {
        let (now, _) = generate_timestamp();

        self.allergens = allergens;
        self.custom_allergens = custom_allergens
            .into_iter()
            .map(|custom| custom.trim().to_string())
            .filter(|custom| !custom.is_empty())
            .collect();
        self.severity_levels = severity_levels;
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_overwrites_and_drops_blank_custom() {
        let mut profile = AllergyProfile::empty(Uuid::new_v4());
        profile.replace(
            vec!["peanuts".to_string()],
            vec!["coconut".to_string()],
            BTreeMap::new(),
        );

        profile.replace(
            vec!["dairy".to_string()],
            vec!["  kiwi ".to_string(), "   ".to_string(), String::new()],
            BTreeMap::from([("dairy".to_string(), "mild".to_string())]),
        );

        assert_eq!(profile.allergens, vec!["dairy"]);
        assert_eq!(profile.custom_allergens, vec!["kiwi"]);
        assert_eq!(profile.severity_levels.get("dairy").map(String::as_str), Some("mild"));
    }
}
