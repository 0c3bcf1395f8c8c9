//! Authenticated account endpoint DTOs
//!
//! Types for the per-user closet item and saved outfit endpoints under
//! /me. Records add ownership and timestamps to the core structures; the
//! client never caches them across sessions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::common::{ClothingCategory, Formality, OutfitSuggestion, Season};

/// Response for GET /me
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub user_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Create payload for POST /me/closet-items
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ClosetItemCreate {
    #[validate(length(min = 1))]
    pub name: String,
    pub category: ClothingCategory,
    #[validate(length(min = 1))]
    pub color: String,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub pattern: Option<String>,
    pub formality: Formality,
    #[validate(length(min = 1))]
    pub seasonality: Vec<Season>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial update payload for PATCH /me/closet-items/{id}
///
/// Absent fields are left untouched by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClosetItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ClothingCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formality: Option<Formality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seasonality: Option<Vec<Season>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Server-persisted closet item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClosetItemRecord {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub category: ClothingCategory,
    pub color: String,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub pattern: Option<String>,
    pub formality: Formality,
    #[serde(default)]
    pub seasonality: Vec<Season>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub image_mime_type: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create payload for POST /me/saved-outfits
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SavedOutfitCreate {
    #[serde(default)]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub occasion: String,
    #[validate(length(min = 1))]
    pub itinerary: String,
    pub outfit_snapshot: OutfitSuggestion,
    #[serde(default)]
    pub global_tips: Vec<String>,
}

/// Server-persisted saved outfit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedOutfitRecord {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub title: Option<String>,
    pub occasion: String,
    pub itinerary: String,
    pub outfit_snapshot: OutfitSuggestion,
    #[serde(default)]
    pub global_tips: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Request for POST /me/generate-outfits
///
/// The server reads the closet from persisted state; only the occasion
/// context travels with the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProtectedGenerateOutfitsRequest {
    #[validate(length(min = 1))]
    pub occasion: String,
    #[validate(length(min = 1))]
    pub itinerary: String,
    #[serde(default)]
    pub preferences: Option<String>,
}

/// Response body for DELETE endpoints; the client ignores it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_serializes_only_present_fields() {
        let update = ClosetItemUpdate {
            color: Some("navy".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"color":"navy"}"#);
    }

    #[test]
    fn record_tolerates_missing_image_fields() {
        let json = r#"{
            "id": "rec-1",
            "user_id": "user-1",
            "name": "White Tee",
            "category": "top",
            "color": "white",
            "formality": "casual",
            "created_at": "2025-06-01T10:00:00Z",
            "updated_at": "2025-06-01T10:00:00Z"
        }"#;
        let record: ClosetItemRecord = serde_json::from_str(json).unwrap();
        assert!(record.image_url.is_none());
        assert!(record.tags.is_empty());
    }
}
