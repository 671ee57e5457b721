use std::sync::Arc;

use crate::domain::allergen::entities::{
    AllergenReferenceTable, SeverityTier, Verdict, VerdictSeverity,
};

/// Severity assigned to every user-supplied allergen.
pub const CUSTOM_ALLERGEN_SEVERITY: SeverityTier = SeverityTier::Medium;

/// Matches ingredients against a user's allergens.
///
/// Matching is plain substring containment on lowercased text: "cashew"
/// matches "cashewmilk", "hazelnut" matches "hazelnutty" and "dairy-free
/// milk" still matches dairy. Each allergen stops at its first matching
/// ingredient, so it is reported at most once per pass.
#[derive(Debug, Clone, Default)]
pub struct AllergenDetector {
    table: Arc<AllergenReferenceTable>,
}

impl AllergenDetector {
    pub fn new(table: AllergenReferenceTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    pub fn table(&self) -> &AllergenReferenceTable {
        &self.table
    }

    pub fn detect<I, A, C>(
        &self,
        ingredients: &[I],
        user_allergens: &[A],
        custom_allergens: &[C],
    ) -> Verdict
    where
        I: AsRef<str>,
        A: AsRef<str>,
        C: AsRef<str>,
    {
        let lowered: Vec<String> = ingredients
            .iter()
            .map(|ingredient| ingredient.as_ref().to_lowercase())
            .collect();

        let mut verdict = Verdict::safe();

        for allergen in user_allergens {
            let allergen = allergen.as_ref();
            let Some(definition) = self.table.get(allergen) else {
                continue;
            };

            if lowered.iter().any(|ingredient| definition.matches(ingredient)) {
                verdict.detected.push(allergen.to_string());
                verdict
                    .details
                    .insert(allergen.to_string(), definition.severity);
            }
        }

        for custom in custom_allergens {
            let custom = custom.as_ref();
            let needle = custom.to_lowercase();

            if lowered
                .iter()
                .any(|ingredient| ingredient.contains(needle.as_str()))
            {
                verdict.detected.push(custom.to_string());
                verdict
                    .details
                    .insert(custom.to_string(), CUSTOM_ALLERGEN_SEVERITY);
            }
        }

        // Severity follows the final details map, so a shadowed entry no longer counts.
        if let Some(&tier) = verdict.details.values().max() {
            verdict.safe = false;
            verdict.severity = VerdictSeverity::from(tier);
        }

        verdict
    }
}
