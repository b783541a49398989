//! STEP 2: STORAGE METHOD
//!
//! | Method          | Days    | Confidence | Note                |
//! |-----------------|---------|------------|---------------------|
//! | Frozen          | × 3     | +10        | freezing extends    |
//! | Refrigerated    | × 1.5   | +5         |                     |
//! | RoomTemperature | × 0.8   | −5         |                     |
//! | Unspecified     | × 1     | 0          |                     |
//!
//! Skipped entirely when no method is given.

use super::{Estimate, Factor};
use crate::types::StorageMethod;

pub const FROZEN_FACTOR: Factor = Factor::new(3, 1);
pub const REFRIGERATED_FACTOR: Factor = Factor::new(3, 2);
pub const ROOM_TEMPERATURE_FACTOR: Factor = Factor::new(4, 5);

pub const FROZEN_NOTE: &str = "Freezing significantly extends shelf life.";

pub fn adjust_for_storage(estimate: Estimate, storage: Option<StorageMethod>) -> Estimate {
    match storage {
        Some(StorageMethod::Frozen) => estimate
            .scale(FROZEN_FACTOR)
            .shift_confidence(10)
            .note(FROZEN_NOTE),
        Some(StorageMethod::Refrigerated) => estimate
            .scale(REFRIGERATED_FACTOR)
            .shift_confidence(5),
        Some(StorageMethod::RoomTemperature) => estimate
            .shrink(ROOM_TEMPERATURE_FACTOR)
            .shift_confidence(-5),
        Some(StorageMethod::Unspecified) | None => estimate,
    }
}
