//! Food Category Classifier
//!
//! Maps a free-text food name to one of six categories using keyword
//! substring matching against the lower-cased name.
//!
//! Matching is deliberately naive:
//! - Categories are tested in a fixed priority order (Dairy, Fruit, Meat, Grain, Vegetable)
//! - A keyword matches anywhere in the name ("pineapple" contains "apple")
//! - The first matching category wins, so "milk chocolate" is Dairy
//!
//! Changing the order or switching to whole-word matching silently changes
//! classification results, so both are fixed here.

use serde::{Deserialize, Serialize};

/// Food category used to select a base shelf life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodCategory {
    Dairy,
    Meat,
    Fruit,
    Vegetable,
    Grain,
    General,
}

impl FoodCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodCategory::Dairy => "Dairy",
            FoodCategory::Meat => "Meat",
            FoodCategory::Fruit => "Fruit",
            FoodCategory::Vegetable => "Vegetable",
            FoodCategory::Grain => "Grain",
            FoodCategory::General => "General",
        }
    }

    /// Get all categories
    pub fn all() -> &'static [FoodCategory] {
        &[
            FoodCategory::Dairy,
            FoodCategory::Meat,
            FoodCategory::Fruit,
            FoodCategory::Vegetable,
            FoodCategory::Grain,
            FoodCategory::General,
        ]
    }
}

impl std::fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword sets in priority order. The first category with a keyword
/// contained in the name wins.
pub const CATEGORY_KEYWORDS: &[(FoodCategory, &[&str])] = &[
    (FoodCategory::Dairy, &["milk", "cheese", "yogurt"]),
    (FoodCategory::Fruit, &["apple", "banana", "orange"]),
    (FoodCategory::Meat, &["chicken", "beef", "fish"]),
    (FoodCategory::Grain, &["bread", "rice", "pasta"]),
    (FoodCategory::Vegetable, &["lettuce", "carrot", "tomato"]),
];

/// Classify a food name into a category.
///
/// Case-insensitive. Returns `General` when no keyword matches, including
/// for an empty name.
pub fn classify(name: &str) -> FoodCategory {
    let name_lower = name.to_lowercase();

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| name_lower.contains(kw)))
        .map(|(category, _)| *category)
        .unwrap_or(FoodCategory::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_keyword_maps_to_its_category() {
        for (category, keywords) in CATEGORY_KEYWORDS {
            for kw in keywords.iter() {
                assert_eq!(classify(kw), *category, "keyword {}", kw);
            }
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("MILK CHOCOLATE"), FoodCategory::Dairy);
        assert_eq!(classify("Granny Smith Apple"), FoodCategory::Fruit);
        assert_eq!(classify("bEeF Jerky"), FoodCategory::Meat);
    }

    #[test]
    fn test_substring_not_whole_word() {
        // "pineapple" contains "apple", "ricecake" contains "rice"
        assert_eq!(classify("pineapple"), FoodCategory::Fruit);
        assert_eq!(classify("ricecakes"), FoodCategory::Grain);
        assert_eq!(classify("catfish"), FoodCategory::Meat);
    }

    #[test]
    fn test_priority_order() {
        // Dairy beats Fruit
        assert_eq!(classify("banana milkshake"), FoodCategory::Dairy);
        // Fruit beats Meat
        assert_eq!(classify("orange chicken"), FoodCategory::Fruit);
        // Meat beats Grain
        assert_eq!(classify("fish and rice"), FoodCategory::Meat);
        // Grain beats Vegetable
        assert_eq!(classify("tomato bread"), FoodCategory::Grain);
    }

    #[test]
    fn test_no_match_is_general() {
        assert_eq!(classify("kiwi"), FoodCategory::General);
        assert_eq!(classify("chocolate"), FoodCategory::General);
        assert_eq!(classify(""), FoodCategory::General);
    }

    #[test]
    fn test_display_matches_as_str() {
        for category in FoodCategory::all() {
            assert_eq!(category.to_string(), category.as_str());
        }
    }
}
