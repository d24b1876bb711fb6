//! Marketplace item analysis records.
//!
//! [`ItemAnalysis`] is the structured result of classifying a photographed
//! item for resale. It is produced fresh on every analysis call and handed
//! to the caller; the gateway never mutates one after construction.

use serde::{Deserialize, Serialize};

/// Material category of a recyclable item.
///
/// The set is closed on purpose: the upstream model is instructed to pick one
/// of these four values, and any other string is a deserialization error
/// rather than a silent coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Metal,
    Plastic,
    Other,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Electronics,
        Category::Metal,
        Category::Plastic,
        Category::Other,
    ];

    /// Wire name, as exchanged with the upstream model.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Metal => "metal",
            Category::Plastic => "plastic",
            Category::Other => "other",
        }
    }

    /// Display label for the French-speaking UI.
    pub fn label_fr(&self) -> &'static str {
        match self {
            Category::Electronics => "Électronique",
            Category::Metal => "Métal",
            Category::Plastic => "Plastique",
            Category::Other => "Autre",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Other
    }
}

/// Title of the fallback record returned when an analysis cannot be completed.
pub const FALLBACK_TITLE: &str = "Objet détecté";

/// Description of the fallback record.
pub const FALLBACK_DESCRIPTION: &str =
    "Analyse indisponible, veuillez remplir les détails manuellement.";

/// Structured classification of a photographed item.
///
/// Wire field names (`weight`, `price`) follow the JSON contract with the
/// upstream model; weights are kilograms, prices Congolese francs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemAnalysis {
    pub title: String,
    pub category: Category,
    #[serde(rename = "weight")]
    pub weight_kg: f64,
    #[serde(rename = "price")]
    pub price_fc: u64,
    pub description: String,
}

impl ItemAnalysis {
    /// Fixed sentinel returned whenever the upstream analysis cannot be
    /// completed or parsed. The marketplace form is always populated with a
    /// usable record, never an error state.
    pub fn unavailable() -> Self {
        Self {
            title: FALLBACK_TITLE.to_string(),
            category: Category::Other,
            weight_kg: 1.0,
            price_fc: 0,
            description: FALLBACK_DESCRIPTION.to_string(),
        }
    }

    /// Whether the record satisfies the field invariants (finite positive
    /// weight; price non-negativity is enforced by the type).
    pub fn is_valid(&self) -> bool {
        self.weight_kg.is_finite() && self.weight_kg > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_names() {
        assert_eq!(
            serde_json::to_string(&Category::Electronics).unwrap(),
            "\"electronics\""
        );
        let parsed: Category = serde_json::from_str("\"plastic\"").unwrap();
        assert_eq!(parsed, Category::Plastic);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let parsed: Result<Category, _> = serde_json::from_str("\"glass\"");
        assert!(parsed.is_err(), "unrecognized categories must fail, not coerce");
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Metal.label_fr(), "Métal");
        assert_eq!(Category::Other.to_string(), "other");
        assert_eq!(Category::ALL.len(), 4);
    }

    #[test]
    fn test_fallback_record() {
        let fallback = ItemAnalysis::unavailable();
        assert_eq!(fallback.title, FALLBACK_TITLE);
        assert_eq!(fallback.category, Category::Other);
        assert_eq!(fallback.weight_kg, 1.0);
        assert_eq!(fallback.price_fc, 0);
        assert!(fallback.is_valid());
    }

    #[test]
    fn test_validity_bounds() {
        let mut analysis = ItemAnalysis::unavailable();
        analysis.weight_kg = 0.0;
        assert!(!analysis.is_valid());
        analysis.weight_kg = -2.5;
        assert!(!analysis.is_valid());
        analysis.weight_kg = f64::NAN;
        assert!(!analysis.is_valid());
        analysis.weight_kg = 0.3;
        assert!(analysis.is_valid());
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let json = r#"{"title":"Fer","category":"metal","weight":1.0,"price":-50,"description":"x"}"#;
        let parsed: Result<ItemAnalysis, _> = serde_json::from_str(json);
        assert!(parsed.is_err());
    }
}
