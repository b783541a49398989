//! STEP 3: PACKAGING
//!
//! Sealed packaging extends shelf life (× 1.3, +5 confidence); opened
//! packaging shortens it (× 0.6 with a floor of one day, −10 confidence).
//! Loose and unspecified packaging leave the estimate untouched.

use super::{Estimate, Factor};
use crate::types::PackagingType;

pub const SEALED_FACTOR: Factor = Factor::new(13, 10);
pub const OPENED_FACTOR: Factor = Factor::new(3, 5);

pub const SEALED_NOTE: &str = "Sealed packaging helps preserve freshness.";
pub const OPENED_NOTE: &str = "Opened packaging reduces shelf life; reseal or transfer to an airtight container.";

pub fn adjust_for_packaging(estimate: Estimate, packaging: Option<PackagingType>) -> Estimate {
    match packaging {
        Some(PackagingType::Sealed) => estimate
            .scale(SEALED_FACTOR)
            .shift_confidence(5)
            .note(SEALED_NOTE),
        Some(PackagingType::Opened) => estimate
            .shrink(OPENED_FACTOR)
            .shift_confidence(-10)
            .note(OPENED_NOTE),
        Some(PackagingType::Loose) | Some(PackagingType::Unspecified) | None => estimate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(days: u32, confidence: i32) -> Estimate {
        Estimate::new(days, confidence, "seed")
    }

    #[test]
    fn test_sealed() {
        let e = adjust_for_packaging(seed(90, 95), Some(PackagingType::Sealed));
        assert_eq!(e.days, 117);
        // Not clamped here
        assert_eq!(e.confidence, 100);
        assert_eq!(e.notes.last().map(String::as_str), Some(SEALED_NOTE));
    }

    #[test]
    fn test_opened_floors_at_one() {
        // 1 × 0.6 = 0.6 → 0 → max(1, 0) = 1
        let e = adjust_for_packaging(seed(1, 85), Some(PackagingType::Opened));
        assert_eq!(e.days, 1);
        assert_eq!(e.confidence, 75);
        assert_eq!(e.notes.last().map(String::as_str), Some(OPENED_NOTE));

        // 7 × 0.6 = 4.2 → 4
        let e = adjust_for_packaging(seed(7, 85), Some(PackagingType::Opened));
        assert_eq!(e.days, 4);
    }

    #[test]
    fn test_loose_is_no_op() {
        assert_eq!(adjust_for_packaging(seed(7, 85), Some(PackagingType::Loose)), seed(7, 85));
        assert_eq!(adjust_for_packaging(seed(7, 85), None), seed(7, 85));
    }
}
