//! STEP 1: BASE LOOKUP
//!
//! Static per-category table of base shelf life (days) and the storage tip
//! that seeds the advisory. Every estimate starts at confidence 85.

use super::Estimate;
use crate::classifier::FoodCategory;

/// Starting confidence before any adjustment
pub const BASE_CONFIDENCE: i32 = 85;

/// Base shelf life and storage advice for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryProfile {
    pub base_days: u32,
    pub advisory: &'static str,
}

/// Look up the base profile for a category
pub fn category_profile(category: FoodCategory) -> CategoryProfile {
    match category {
        FoodCategory::Dairy => CategoryProfile {
            base_days: 5,
            advisory: "Keep refrigerated below 4°C to extend shelf life.",
        },
        FoodCategory::Meat => CategoryProfile {
            base_days: 3,
            advisory: "Keep frozen or refrigerated. Cook within 3 days of thawing.",
        },
        FoodCategory::Fruit => CategoryProfile {
            base_days: 7,
            advisory: "Store in a cool place. Some fruits ripen faster at room temperature.",
        },
        FoodCategory::Vegetable => CategoryProfile {
            base_days: 10,
            advisory: "Keep in crisper drawer with moderate humidity.",
        },
        FoodCategory::Grain => CategoryProfile {
            base_days: 30,
            advisory: "Store in airtight containers in a dry environment.",
        },
        FoodCategory::General => CategoryProfile {
            base_days: 7,
            advisory: "Store in a cool, dry place.",
        },
    }
}

/// Seed the running estimate for a category
pub fn base_estimate(category: FoodCategory) -> Estimate {
    let profile = category_profile(category);
    Estimate::new(profile.base_days, BASE_CONFIDENCE, profile.advisory)
}
