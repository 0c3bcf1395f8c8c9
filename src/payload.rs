//! Request payload normalization
//!
//! Converts validated form values into the two wire shapes the API
//! expects: an inspectable multipart description for analyze, and JSON
//! request bodies for the generate endpoints. Building a payload twice
//! from the same input yields identical content; only the HTTP client
//! turns these into actual request bodies.

use closetplan_protocol::{
    AnalyzeClosetResponse, GenerateOutfitsRequest, ProtectedGenerateOutfitsRequest,
};

use crate::validation::PlannerFormValues;

/// Repeated multipart field name for closet images
pub const ANALYZE_FILES_FIELD: &str = "files[]";

/// Multipart field name for the optional manual clothes text
pub const ANALYZE_MANUAL_TEXT_FIELD: &str = "manual_clothes_text";

/// One file part of the analyze request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeFilePart {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Multipart payload for POST /analyze-closet
///
/// Files keep their selection order; manual text is present only when it
/// trims to something non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzePayload {
    pub files: Vec<AnalyzeFilePart>,
    pub manual_clothes_text: Option<String>,
}

pub fn build_analyze_payload(values: &PlannerFormValues) -> AnalyzePayload {
    let files = values
        .files
        .iter()
        .map(|file| AnalyzeFilePart {
            file_name: file.file_name.clone(),
            mime_type: file.mime_type.clone(),
            bytes: file.bytes.clone(),
        })
        .collect();

    let manual_text = values.manual_clothes_text.trim();
    AnalyzePayload {
        files,
        manual_clothes_text: if manual_text.is_empty() {
            None
        } else {
            Some(manual_text.to_string())
        },
    }
}

/// Empty-after-trim preferences normalize to absent, never to `Some("")`.
pub fn normalize_preferences(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Build the generate request from an analyze result and the current form
///
/// The item list is taken verbatim from the analysis; only the free-text
/// fields are trimmed.
pub fn build_generate_request(
    analysis: &AnalyzeClosetResponse,
    values: &PlannerFormValues,
) -> GenerateOutfitsRequest {
    GenerateOutfitsRequest {
        closet_items: analysis.items.clone(),
        occasion: values.occasion.trim().to_string(),
        itinerary: values.itinerary.trim().to_string(),
        preferences: normalize_preferences(&values.preferences),
    }
}

/// Build the account-flow generate request from raw plan inputs
pub fn build_protected_generate_request(
    occasion: &str,
    itinerary: &str,
    preferences: &str,
) -> ProtectedGenerateOutfitsRequest {
    ProtectedGenerateOutfitsRequest {
        occasion: occasion.trim().to_string(),
        itinerary: itinerary.trim().to_string(),
        preferences: normalize_preferences(preferences),
    }
}
