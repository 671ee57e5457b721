use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// Static severity of a single allergen.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    Low,
    Medium,
    High,
}

impl SeverityTier {
    pub fn as_str(&self) -> &str {
        match self {
            SeverityTier::Low => "low",
            SeverityTier::Medium => "medium",
            SeverityTier::High => "high",
        }
    }
}

/// Aggregate classification of one detection run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VerdictSeverity {
    Safe,
    Mild,
    Moderate,
    Severe,
}

impl VerdictSeverity {
    pub fn as_str(&self) -> &str {
        match self {
            VerdictSeverity::Safe => "safe",
            VerdictSeverity::Mild => "mild",
            VerdictSeverity::Moderate => "moderate",
            VerdictSeverity::Severe => "severe",
        }
    }
}

impl From<SeverityTier> for VerdictSeverity {
    fn from(tier: SeverityTier) -> Self {
        match tier {
            SeverityTier::Low => VerdictSeverity::Mild,
            SeverityTier::Medium => VerdictSeverity::Moderate,
            SeverityTier::High => VerdictSeverity::Severe,
        }
    }
}

/// Unrecognised values read back as `Severe`, never as `Safe`.
impl From<&str> for VerdictSeverity {
    fn from(s: &str) -> Self {
        match s {
            "safe" => VerdictSeverity::Safe,
            "mild" => VerdictSeverity::Mild,
            "moderate" => VerdictSeverity::Moderate,
            _ => VerdictSeverity::Severe,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllergenDefinition {
    pub id: String,
    pub keywords: Vec<String>,
    pub severity: SeverityTier,
}

impl AllergenDefinition {
    pub fn new(id: impl Into<String>, keywords: &[&str], severity: SeverityTier) -> Self {
        Self {
            id: id.into(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            severity,
        }
    }

    /// Substring match against an already lowercased ingredient.
    pub fn matches(&self, ingredient_lower: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| ingredient_lower.contains(keyword.as_str()))
    }
}

/// Immutable allergen knowledge base. Iteration follows insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllergenReferenceTable {
    definitions: Vec<AllergenDefinition>,
    index: HashMap<String, usize>,
}

impl AllergenReferenceTable {
    pub fn new(definitions: Vec<AllergenDefinition>) -> Result<Self, CoreError> {
        let mut index = HashMap::with_capacity(definitions.len());

        for (position, definition) in definitions.iter().enumerate() {
            if definition.keywords.is_empty() {
                return Err(CoreError::InvalidAllergenTable(format!(
                    "allergen '{}' has no keywords",
                    definition.id
                )));
            }

            if definition
                .keywords
                .iter()
                .any(|k| k.is_empty() || *k != k.to_lowercase())
            {
                return Err(CoreError::InvalidAllergenTable(format!(
                    "allergen '{}' has an empty or non-lowercase keyword",
                    definition.id
                )));
            }

            if index.insert(definition.id.clone(), position).is_some() {
                return Err(CoreError::InvalidAllergenTable(format!(
                    "duplicate allergen '{}'",
                    definition.id
                )));
            }
        }

        Ok(Self { definitions, index })
    }

    /// The twelve common allergens offered to every user.
    pub fn standard() -> Self {
        use SeverityTier::{High, Low, Medium};

        let definitions = vec![
            AllergenDefinition::new("peanuts", &["peanut", "groundnut", "arachis"], High),
            AllergenDefinition::new(
                "tree_nuts",
                &[
                    "almond",
                    "cashew",
                    "walnut",
                    "pecan",
                    "pistachio",
                    "hazelnut",
                    "macadamia",
                    "brazil nut",
                ],
                High,
            ),
            AllergenDefinition::new(
                "dairy",
                &[
                    "milk", "cheese", "butter", "cream", "yogurt", "whey", "casein", "lactose",
                ],
                Medium,
            ),
            AllergenDefinition::new("eggs", &["egg", "albumin", "mayonnaise"], Medium),
            AllergenDefinition::new(
                "soy",
                &["soy", "soya", "tofu", "edamame", "tempeh"],
                Medium,
            ),
            AllergenDefinition::new(
                "wheat",
                &["wheat", "flour", "gluten", "semolina", "durum"],
                Medium,
            ),
            AllergenDefinition::new(
                "fish",
                &["fish", "salmon", "tuna", "cod", "anchovy"],
                High,
            ),
            AllergenDefinition::new(
                "shellfish",
                &[
                    "shrimp", "crab", "lobster", "prawn", "clam", "oyster", "mussel",
                ],
                High,
            ),
            AllergenDefinition::new("sesame", &["sesame", "tahini"], Medium),
            AllergenDefinition::new("mustard", &["mustard"], Low),
            AllergenDefinition::new("celery", &["celery", "celeriac"], Low),
            AllergenDefinition::new(
                "sulfites",
                &["sulfite", "sulphite", "sodium metabisulfite"],
                Medium,
            ),
        ];

        let index = definitions
            .iter()
            .enumerate()
            .map(|(position, d)| (d.id.clone(), position))
            .collect();

        Self { definitions, index }
    }

    pub fn get(&self, id: &str) -> Option<&AllergenDefinition> {
        self.index.get(id).map(|&position| &self.definitions[position])
    }

    pub fn identifiers(&self) -> Vec<String> {
        self.definitions.iter().map(|d| d.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AllergenDefinition> {
        self.definitions.iter()
    }
}

impl Default for AllergenReferenceTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Outcome of a single detection run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Verdict {
    pub detected: Vec<String>,
    pub severity: VerdictSeverity,
    pub safe: bool,
    pub details: BTreeMap<String, SeverityTier>,
}

impl Verdict {
    pub fn safe() -> Self {
        Self {
            detected: Vec::new(),
            severity: VerdictSeverity::Safe,
            safe: true,
            details: BTreeMap::new(),
        }
    }

    /// Distinct identifiers, in detection order.
    pub fn distinct_detected(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.detected
            .iter()
            .filter(|id| seen.insert(id.as_str()))
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_invariants() {
        let table = AllergenReferenceTable::standard();

        assert_eq!(table.len(), 12);
        assert!(table.iter().all(|d| !d.keywords.is_empty()));
        assert!(
            table
                .iter()
                .flat_map(|d| d.keywords.iter())
                .all(|k| *k == k.to_lowercase())
        );

        let rebuilt = AllergenReferenceTable::new(table.iter().cloned().collect());
        assert_eq!(rebuilt, Ok(table));
    }

    #[test]
    fn test_standard_table_order_and_severity() {
        let table = AllergenReferenceTable::standard();

        assert_eq!(table.identifiers()[0], "peanuts");
        assert_eq!(table.identifiers()[11], "sulfites");
        assert_eq!(table.get("peanuts").map(|d| d.severity), Some(SeverityTier::High));
        assert_eq!(table.get("mustard").map(|d| d.severity), Some(SeverityTier::Low));
        assert_eq!(table.get("dairy").map(|d| d.severity), Some(SeverityTier::Medium));
        assert!(table.get("durian").is_none());
    }

    #[test]
    fn test_table_rejects_duplicates() {
        let result = AllergenReferenceTable::new(vec![
            AllergenDefinition::new("kiwi", &["kiwi"], SeverityTier::Low),
            AllergenDefinition::new("kiwi", &["actinidia"], SeverityTier::High),
        ]);

        assert!(matches!(result, Err(CoreError::InvalidAllergenTable(_))));
    }

    #[test]
    fn test_table_rejects_empty_keywords() {
        let result = AllergenReferenceTable::new(vec![AllergenDefinition::new(
            "lupin",
            &[],
            SeverityTier::Medium,
        )]);

        assert!(matches!(result, Err(CoreError::InvalidAllergenTable(_))));
    }

    #[test]
    fn test_definition_keywords_are_lowercased() {
        let definition = AllergenDefinition::new("lupin", &["LUPIN"], SeverityTier::Medium);
        assert_eq!(definition.keywords, vec!["lupin".to_string()]);
        assert!(definition.matches("lupin flour"));
    }

    #[test]
    fn test_tier_ordering_maps_to_verdict() {
        assert!(SeverityTier::High > SeverityTier::Medium);
        assert!(SeverityTier::Medium > SeverityTier::Low);
        assert_eq!(VerdictSeverity::from(SeverityTier::Low), VerdictSeverity::Mild);
        assert_eq!(VerdictSeverity::from(SeverityTier::High), VerdictSeverity::Severe);
    }

    #[test]
    fn test_unknown_stored_severity_reads_as_severe() {
        assert_eq!(VerdictSeverity::from("safe"), VerdictSeverity::Safe);
        assert_eq!(VerdictSeverity::from("moderate"), VerdictSeverity::Moderate);
        assert_eq!(VerdictSeverity::from(""), VerdictSeverity::Severe);
        assert_eq!(VerdictSeverity::from("SAFE"), VerdictSeverity::Severe);
        assert_eq!(VerdictSeverity::from("critical"), VerdictSeverity::Severe);
    }

    #[test]
    fn test_verdict_serializes_lowercase() {
        let mut verdict = Verdict::safe();
        verdict.detected.push("peanuts".to_string());
        verdict.details.insert("peanuts".to_string(), SeverityTier::High);
        verdict.severity = VerdictSeverity::Severe;
        verdict.safe = false;

        let value = serde_json::to_value(&verdict).unwrap();
        assert_eq!(value["severity"], "severe");
        assert_eq!(value["details"]["peanuts"], "high");
    }
}
