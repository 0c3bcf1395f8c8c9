//! Public planner endpoint DTOs
//!
//! Types for the unauthenticated analyze/generate flow and the health
//! probe.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::common::{CategoryCounts, ClosetItem, OutfitSuggestion};

/// Response for GET /health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Provenance of an analysis result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalyzeSource {
    #[serde(rename = "images")]
    Images,
    #[serde(rename = "manual_text")]
    ManualText,
    #[serde(rename = "images+manual_text")]
    ImagesAndManualText,
}

/// Response for POST /analyze-closet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeClosetResponse {
    pub source: AnalyzeSource,
    pub summary: String,
    #[serde(default)]
    pub items: Vec<ClosetItem>,
    #[serde(default)]
    pub category_counts: CategoryCounts,
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// Request for POST /generate-outfits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct GenerateOutfitsRequest {
    #[validate(length(min = 1))]
    pub closet_items: Vec<ClosetItem>,
    #[validate(length(min = 1))]
    pub occasion: String,
    #[validate(length(min = 1))]
    pub itinerary: String,
    #[serde(default)]
    pub preferences: Option<String>,
}

/// Response for POST /generate-outfits
///
/// The server produces between two and four suggestions per batch; the
/// `Validate` impl mirrors that bound without rejecting anything locally.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerateOutfitsResponse {
    pub occasion: String,
    pub itinerary: String,
    #[serde(default)]
    #[validate(length(min = 2, max = 4))]
    pub outfits: Vec<OutfitSuggestion>,
    #[serde(default)]
    pub global_tips: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_source_roundtrips_combined_tag() {
        let json = serde_json::to_string(&AnalyzeSource::ImagesAndManualText).unwrap();
        assert_eq!(json, "\"images+manual_text\"");

        let parsed: AnalyzeSource = serde_json::from_str("\"manual_text\"").unwrap();
        assert_eq!(parsed, AnalyzeSource::ManualText);
    }

    #[test]
    fn analyze_response_lists_default_to_empty() {
        let parsed: AnalyzeClosetResponse = serde_json::from_str(
            r#"{"source":"images","summary":"Empty closet.","category_counts":{}}"#,
        )
        .unwrap();

        assert!(parsed.items.is_empty());
        assert!(parsed.warnings.is_empty());
        assert_eq!(parsed.category_counts.top, 0);
    }

    #[test]
    fn generate_request_omitted_preferences_parse_as_none() {
        let parsed: GenerateOutfitsRequest = serde_json::from_str(
            r#"{"closet_items":[],"occasion":"Team dinner","itinerary":"Dinner then drinks"}"#,
        )
        .unwrap();
        assert!(parsed.preferences.is_none());
    }
}
