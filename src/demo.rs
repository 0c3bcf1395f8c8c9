//! Canned demonstration data
//!
//! A fixed analyze/generate result pair used by the offline escape hatch.
//! Activating it never touches the network; the planner session copies
//! the occasion fields out of this content back into the form.

use closetplan_protocol::{
    AnalyzeClosetResponse, AnalyzeSource, CategoryCounts, ClosetItem, ClothingCategory, Formality,
    GenerateOutfitsResponse, OutfitPiece, OutfitSuggestion, Season,
};

pub const DEMO_PREFERENCES: &str = "Prefer flat shoes and light layers.";

fn item(
    id: &str,
    name: &str,
    category: ClothingCategory,
    color: &str,
    formality: Formality,
    seasonality: &[Season],
) -> ClosetItem {
    ClosetItem {
        id: id.to_string(),
        name: name.to_string(),
        category,
        color: color.to_string(),
        material: None,
        pattern: None,
        formality,
        seasonality: seasonality.to_vec(),
        tags: vec!["demo".to_string()],
        notes: None,
    }
}

pub fn demo_analyze_result() -> AnalyzeClosetResponse {
    AnalyzeClosetResponse {
        source: AnalyzeSource::ManualText,
        summary: "Parsed 5 items: a casual base with one smart layer.".to_string(),
        items: vec![
            item(
                "demo-item-1",
                "White Tee",
                ClothingCategory::Top,
                "white",
                Formality::Casual,
                &[Season::Spring, Season::Summer],
            ),
            item(
                "demo-item-2",
                "Black Jeans",
                ClothingCategory::Bottom,
                "black",
                Formality::SmartCasual,
                &[Season::Spring, Season::Fall, Season::Winter],
            ),
            item(
                "demo-item-3",
                "Navy Overshirt",
                ClothingCategory::Outerwear,
                "navy",
                Formality::SmartCasual,
                &[Season::Spring, Season::Fall],
            ),
            item(
                "demo-item-4",
                "White Sneakers",
                ClothingCategory::Shoes,
                "white",
                Formality::Casual,
                &[Season::Spring, Season::Summer, Season::Fall],
            ),
            item(
                "demo-item-5",
                "Brown Leather Belt",
                ClothingCategory::Accessory,
                "brown",
                Formality::SmartCasual,
                &[Season::Spring, Season::Summer, Season::Fall, Season::Winter],
            ),
        ],
        category_counts: CategoryCounts {
            top: 1,
            bottom: 1,
            outerwear: 1,
            shoes: 1,
            accessory: 1,
            ..Default::default()
        },
        warnings: vec!["Demo data: results are illustrative only.".to_string()],
    }
}

pub fn demo_outfit_result() -> GenerateOutfitsResponse {
    GenerateOutfitsResponse {
        occasion: "Casual team dinner".to_string(),
        itinerary: "Dinner at a bistro, then an evening walk".to_string(),
        outfits: vec![
            OutfitSuggestion {
                outfit_id: "demo-outfit-1".to_string(),
                title: "Clean Smart Casual".to_string(),
                pieces: vec![
                    OutfitPiece {
                        item_id: "demo-item-1".to_string(),
                        item_name: "White Tee".to_string(),
                        category: ClothingCategory::Top,
                        styling_note: "Tucked in front for a sharper line.".to_string(),
                    },
                    OutfitPiece {
                        item_id: "demo-item-2".to_string(),
                        item_name: "Black Jeans".to_string(),
                        category: ClothingCategory::Bottom,
                        styling_note: "Dark wash reads dressier at dinner.".to_string(),
                    },
                    OutfitPiece {
                        item_id: "demo-item-4".to_string(),
                        item_name: "White Sneakers".to_string(),
                        category: ClothingCategory::Shoes,
                        styling_note: "Clean white keeps it relaxed.".to_string(),
                    },
                ],
                reasoning: "High-contrast basics work for a bistro without overdressing."
                    .to_string(),
                confidence: 0.86,
                alternatives: vec!["Swap sneakers for loafers if the venue is upscale.".to_string()],
            },
            OutfitSuggestion {
                outfit_id: "demo-outfit-2".to_string(),
                title: "Relaxed Layers".to_string(),
                pieces: vec![
                    OutfitPiece {
                        item_id: "demo-item-1".to_string(),
                        item_name: "White Tee".to_string(),
                        category: ClothingCategory::Top,
                        styling_note: "Good base layer.".to_string(),
                    },
                    OutfitPiece {
                        item_id: "demo-item-3".to_string(),
                        item_name: "Navy Overshirt".to_string(),
                        category: ClothingCategory::Outerwear,
                        styling_note: "Adds structure and warmth for the walk.".to_string(),
                    },
                    OutfitPiece {
                        item_id: "demo-item-2".to_string(),
                        item_name: "Black Jeans".to_string(),
                        category: ClothingCategory::Bottom,
                        styling_note: "Anchors the navy layer.".to_string(),
                    },
                ],
                reasoning: "Layering covers the temperature drop after dinner.".to_string(),
                confidence: 0.79,
                alternatives: Vec::new(),
            },
        ],
        global_tips: vec![
            "Steam the overshirt before leaving.".to_string(),
            "Carry the layer rather than wearing it indoors.".to_string(),
        ],
    }
}
