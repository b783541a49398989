//! STEP 4: TEMPERATURE
//!
//! Always applied. Warm storage (> 25°C) halves shelf life, cold storage
//! (< 5°C) extends it by half. No physical range is enforced: −200°C is
//! simply "cold".

use super::{Estimate, Factor};

/// Above this, storage counts as warm
pub const WARM_THRESHOLD_C: f64 = 25.0;

/// Below this, storage counts as cold
pub const COLD_THRESHOLD_C: f64 = 5.0;

pub const WARM_FACTOR: Factor = Factor::new(1, 2);
pub const COLD_FACTOR: Factor = Factor::new(3, 2);

pub fn adjust_for_temperature(estimate: Estimate, temperature_c: f64) -> Estimate {
    if temperature_c > WARM_THRESHOLD_C {
        estimate.shrink(WARM_FACTOR).shift_confidence(-15)
    } else if temperature_c < COLD_THRESHOLD_C {
        estimate.scale(COLD_FACTOR).shift_confidence(5)
    } else {
        estimate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(days: u32) -> Estimate {
        Estimate::new(days, 85, "seed")
    }

    #[test]
    fn test_warm() {
        let e = adjust_for_temperature(seed(3), 30.0);
        assert_eq!(e.days, 1);
        assert_eq!(e.confidence, 70);

        let e = adjust_for_temperature(seed(1), 40.0);
        assert_eq!(e.days, 1);
    }

    #[test]
    fn test_cold() {
        let e = adjust_for_temperature(seed(5), 3.0);
        assert_eq!(e.days, 7);
        assert_eq!(e.confidence, 90);
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        assert_eq!(adjust_for_temperature(seed(7), 25.0), seed(7));
        assert_eq!(adjust_for_temperature(seed(7), 5.0), seed(7));
        assert_eq!(adjust_for_temperature(seed(7), 15.0), seed(7));
    }

    #[test]
    fn test_extreme_cold_is_not_special_cased() {
        let e = adjust_for_temperature(seed(10), -200.0);
        assert_eq!(e.days, 15);
        assert_eq!(e.confidence, 90);
    }
}
