//! Test fixtures shared across orchestrator tests

use serde_json::{json, Value};

/// JSON for a minimal analyzed closet item
pub fn item_json(id: &str, name: &str, category: &str, color: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "category": category,
        "color": color,
        "material": null,
        "pattern": null,
        "formality": "casual",
        "seasonality": ["spring", "summer"],
        "tags": ["test"],
        "notes": null
    })
}

/// JSON for an analyze response holding the given items
pub fn analyze_response_json(items: Vec<Value>) -> Value {
    let top_count = items.len();
    json!({
        "source": "manual_text",
        "summary": format!("Parsed {} item(s).", top_count),
        "items": items,
        "category_counts": {
            "top": top_count,
            "bottom": 0,
            "dress": 0,
            "outerwear": 0,
            "shoes": 0,
            "accessory": 0,
            "other": 0
        },
        "warnings": []
    })
}

/// JSON for a generate response with two fixed outfits
pub fn outfits_response_json(occasion: &str, itinerary: &str) -> Value {
    json!({
        "occasion": occasion,
        "itinerary": itinerary,
        "outfits": [
            {
                "outfit_id": "outfit-1",
                "title": "Simple Outfit",
                "pieces": [
                    {"item_id": "item-1", "item_name": "White Tee", "category": "top", "styling_note": "Keep it simple."},
                    {"item_id": "item-2", "item_name": "Black Jeans", "category": "bottom", "styling_note": "Creates contrast."}
                ],
                "reasoning": "Works for casual plans.",
                "confidence": 0.84,
                "alternatives": []
            },
            {
                "outfit_id": "outfit-2",
                "title": "Layered Outfit",
                "pieces": [
                    {"item_id": "item-1", "item_name": "White Tee", "category": "top", "styling_note": "Good base layer."},
                    {"item_id": "item-3", "item_name": "Navy Overshirt", "category": "outerwear", "styling_note": "Adds structure."}
                ],
                "reasoning": "Adds flexibility for weather changes.",
                "confidence": 0.8,
                "alternatives": ["Swap overshirt for a blazer."]
            }
        ],
        "global_tips": ["Steam the shirt before leaving."]
    })
}

/// JSON for a persisted closet item record
pub fn item_record_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "user_id": "user-1",
        "name": name,
        "category": "top",
        "color": "white",
        "material": null,
        "pattern": null,
        "formality": "casual",
        "seasonality": ["spring"],
        "tags": [],
        "notes": null,
        "image_path": null,
        "image_mime_type": null,
        "image_url": null,
        "created_at": "2025-06-01T10:00:00Z",
        "updated_at": "2025-06-01T10:00:00Z"
    })
}

/// JSON for a persisted saved outfit record
pub fn saved_outfit_record_json(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "user_id": "user-1",
        "title": title,
        "occasion": "Team dinner",
        "itinerary": "Dinner then drinks",
        "outfit_snapshot": {
            "outfit_id": "outfit-1",
            "title": title,
            "pieces": [
                {"item_id": "item-1", "item_name": "White Tee", "category": "top", "styling_note": "Keep it simple."},
                {"item_id": "item-2", "item_name": "Black Jeans", "category": "bottom", "styling_note": "Creates contrast."}
            ],
            "reasoning": "Works for casual plans.",
            "confidence": 0.84,
            "alternatives": []
        },
        "global_tips": [],
        "created_at": "2025-06-02T09:00:00Z"
    })
}

/// JSON for the /me profile response
pub fn me_response_json() -> Value {
    json!({
        "user_id": "user-1",
        "email": "user@example.com",
        "display_name": "Test User"
    })
}
