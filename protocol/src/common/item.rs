//! Closet item data structures
//!
//! Core garment types shared by the analyze, generate, and account
//! endpoints. Categories and formality levels are closed enums; unknown
//! values are a wire error, not a fallback.

use serde::{Deserialize, Serialize};

/// Garment category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClothingCategory {
    Top,
    Bottom,
    Dress,
    Outerwear,
    Shoes,
    Accessory,
    Other,
}

impl ClothingCategory {
    /// All categories in display order
    pub const ALL: [ClothingCategory; 7] = [
        ClothingCategory::Top,
        ClothingCategory::Bottom,
        ClothingCategory::Dress,
        ClothingCategory::Outerwear,
        ClothingCategory::Shoes,
        ClothingCategory::Accessory,
        ClothingCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClothingCategory::Top => "top",
            ClothingCategory::Bottom => "bottom",
            ClothingCategory::Dress => "dress",
            ClothingCategory::Outerwear => "outerwear",
            ClothingCategory::Shoes => "shoes",
            ClothingCategory::Accessory => "accessory",
            ClothingCategory::Other => "other",
        }
    }
}

/// Formality level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Formality {
    Casual,
    SmartCasual,
    Formal,
    Athleisure,
    Unknown,
}

impl Formality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Formality::Casual => "casual",
            Formality::SmartCasual => "smart-casual",
            Formality::Formal => "formal",
            Formality::Athleisure => "athleisure",
            Formality::Unknown => "unknown",
        }
    }
}

/// Season tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }
}

/// A single garment, as returned by the analyze endpoint or entered
/// manually through the account flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosetItem {
    pub id: String,
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
}

/// Per-category item counts
///
/// All seven categories are always present on the wire; a missing field
/// deserializes to zero. Counts are displayed as given and never
/// reconciled against the item list on the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    #[serde(default)]
    pub top: u32,
    #[serde(default)]
    pub bottom: u32,
    #[serde(default)]
    pub dress: u32,
    #[serde(default)]
    pub outerwear: u32,
    #[serde(default)]
    pub shoes: u32,
    #[serde(default)]
    pub accessory: u32,
    #[serde(default)]
    pub other: u32,
}

impl CategoryCounts {
    /// Counts paired with their category, in display order
    pub fn entries(&self) -> [(ClothingCategory, u32); 7] {
        [
            (ClothingCategory::Top, self.top),
            (ClothingCategory::Bottom, self.bottom),
            (ClothingCategory::Dress, self.dress),
            (ClothingCategory::Outerwear, self.outerwear),
            (ClothingCategory::Shoes, self.shoes),
            (ClothingCategory::Accessory, self.accessory),
            (ClothingCategory::Other, self.other),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&ClothingCategory::Outerwear).unwrap();
        assert_eq!(json, "\"outerwear\"");
    }

    #[test]
    fn formality_uses_kebab_case() {
        let json = serde_json::to_string(&Formality::SmartCasual).unwrap();
        assert_eq!(json, "\"smart-casual\"");

        let parsed: Formality = serde_json::from_str("\"smart-casual\"").unwrap();
        assert_eq!(parsed, Formality::SmartCasual);
    }

    #[test]
    fn closet_item_list_fields_default_to_empty() {
        let item: ClosetItem = serde_json::from_str(
            r#"{"id":"item-1","name":"White Tee","category":"top","color":"white","formality":"casual"}"#,
        )
        .unwrap();

        assert!(item.seasonality.is_empty());
        assert!(item.tags.is_empty());
        assert!(item.material.is_none());
    }

    #[test]
    fn category_counts_default_missing_fields_to_zero() {
        let counts: CategoryCounts = serde_json::from_str(r#"{"top":2,"shoes":1}"#).unwrap();
        assert_eq!(counts.top, 2);
        assert_eq!(counts.shoes, 1);
        assert_eq!(counts.dress, 0);
        assert_eq!(counts.entries().len(), 7);
    }
}
