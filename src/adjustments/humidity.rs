//! STEP 5: HUMIDITY
//!
//! Always applied. Above 80% relative humidity, shelf life drops to 70%
//! (never below one day) and confidence falls by 10. Humidity is assumed
//! to be in [0, 100]; out-of-range values are rejected before this point.

use super::{Estimate, Factor};

/// Above this, storage counts as humid
pub const HUMID_THRESHOLD_PCT: f64 = 80.0;

pub const HUMID_FACTOR: Factor = Factor::new(7, 10);

pub fn adjust_for_humidity(estimate: Estimate, humidity_pct: f64) -> Estimate {
    if humidity_pct > HUMID_THRESHOLD_PCT {
        estimate.shrink(HUMID_FACTOR).shift_confidence(-10)
    } else {
        estimate
    }
}
