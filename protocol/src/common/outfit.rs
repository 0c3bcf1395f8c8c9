//! Outfit suggestion data structures

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::common::ClothingCategory;

/// One piece of an outfit, referencing a closet item by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitPiece {
    pub item_id: String,
    pub item_name: String,
    pub category: ClothingCategory,
    pub styling_note: String,
}

/// A generated outfit suggestion
///
/// `confidence` is a model score in [0, 1]; the server enforces the range
/// and the `Validate` impl mirrors that contract for local checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct OutfitSuggestion {
    pub outfit_id: String,
    pub title: String,
    #[validate(length(min = 2))]
    pub pieces: Vec<OutfitPiece>,
    pub reasoning: String,
    #[validate(range(min = 0.0, max = 1.0))]
    pub confidence: f64,
    #[serde(default)]
    pub alternatives: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion(confidence: f64, piece_count: usize) -> OutfitSuggestion {
        let piece = OutfitPiece {
            item_id: "item-1".to_string(),
            item_name: "White Tee".to_string(),
            category: ClothingCategory::Top,
            styling_note: "Keep it simple.".to_string(),
        };
        OutfitSuggestion {
            outfit_id: "outfit-1".to_string(),
            title: "Simple Outfit".to_string(),
            pieces: vec![piece; piece_count],
            reasoning: "Works for casual plans.".to_string(),
            confidence,
            alternatives: Vec::new(),
        }
    }

    #[test]
    fn confidence_outside_unit_interval_fails_validation() {
        assert!(suggestion(0.84, 2).validate().is_ok());
        assert!(suggestion(1.2, 2).validate().is_err());
    }

    #[test]
    fn outfit_needs_at_least_two_pieces() {
        assert!(suggestion(0.5, 1).validate().is_err());
    }
}
