//! Adjustment modules for the estimation pipeline
//!
//! Each input factor is implemented in its own module as a pure function
//! `Estimate -> Estimate`. The estimator folds them in a fixed order:
//!
//! 1. `base` - category lookup (days, advisory seed, confidence 85)
//! 2. `storage` - frozen / refrigerated / room temperature
//! 3. `packaging` - sealed / opened
//! 4. `temperature` - warm or cold storage
//! 5. `humidity` - high humidity penalty
//! 6. `expiry` - cap against a stated expiry date
//!
//! Order matters: every step compounds on the already-adjusted days and
//! confidence. Confidence may leave [50, 95] mid-pipeline and is clamped
//! exactly once, in [`Estimate::finish`].

pub mod base;
pub mod storage;
pub mod packaging;
pub mod temperature;
pub mod humidity;
pub mod expiry;

pub use base::{base_estimate, category_profile, CategoryProfile, BASE_CONFIDENCE};
pub use expiry::{days_until, reconcile_expiry};
pub use humidity::adjust_for_humidity;
pub use packaging::adjust_for_packaging;
pub use storage::adjust_for_storage;
pub use temperature::adjust_for_temperature;

use smallvec::SmallVec;

use crate::classifier::FoodCategory;
use crate::types::PredictionResult;

/// Lowest confidence reported to callers
pub const CONFIDENCE_FLOOR: i32 = 50;

/// Highest confidence reported to callers
pub const CONFIDENCE_CEILING: i32 = 95;

/// Exact multiplier for day counts.
///
/// Stored as a ratio so `floor(days * factor)` is integer division and
/// never drifts (e.g. `floor(90 * 1.3)` is exactly 117).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Factor {
    num: u32,
    den: u32,
}

impl Factor {
    pub const fn new(num: u32, den: u32) -> Self {
        Self { num, den }
    }

    /// `floor(days * factor)`
    pub fn apply(self, days: u32) -> u32 {
        let scaled = u64::from(days) * u64::from(self.num) / u64::from(self.den);
        u32::try_from(scaled).unwrap_or(u32::MAX)
    }
}

/// Running state threaded through the adjustment steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Estimate {
    pub days: u32,
    /// Unclamped until `finish`
    pub confidence: i32,
    /// Advisory sentences, seed first
    pub notes: SmallVec<[String; 4]>,
}

impl Estimate {
    pub fn new(days: u32, confidence: i32, seed: impl Into<String>) -> Self {
        let mut notes = SmallVec::new();
        notes.push(seed.into());
        Self {
            days,
            confidence,
            notes,
        }
    }

    /// Multiply days by `factor`, flooring the result
    pub fn scale(mut self, factor: Factor) -> Self {
        self.days = factor.apply(self.days);
        self
    }

    /// Multiply days by `factor`, flooring the result but never below 1
    pub fn shrink(mut self, factor: Factor) -> Self {
        self.days = factor.apply(self.days).max(1);
        self
    }

    pub fn shift_confidence(mut self, delta: i32) -> Self {
        self.confidence += delta;
        self
    }

    pub fn note(mut self, text: impl Into<String>) -> Self {
        self.notes.push(text.into());
        self
    }

    pub fn advisory(&self) -> String {
        self.notes.join(" ")
    }

    /// Clamp confidence and build the caller-facing result
    pub fn finish(self, category: FoodCategory) -> PredictionResult {
        let confidence = self.confidence.clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING);
        PredictionResult {
            category,
            days: self.days.max(1),
            // Clamped to [50, 95], always fits
            confidence: confidence as u8,
            advisory: self.advisory(),
        }
    }
}
