//! STEP 6: EXPIRY RECONCILIATION
//!
//! A stated expiry date can only cap the estimate, never extend it.
//! When the date is already past or due today (zero or negative days left)
//! the hint is ignored; no "already expired" advice is produced.

use chrono::NaiveDate;

use super::Estimate;

/// Whole days from `today` until `expiry` (negative once passed)
pub fn days_until(expiry: NaiveDate, today: NaiveDate) -> i64 {
    (expiry - today).num_days()
}

pub fn reconcile_expiry(estimate: Estimate, expiry: Option<NaiveDate>, today: NaiveDate) -> Estimate {
    let Some(expiry) = expiry else {
        return estimate;
    };

    let remaining = days_until(expiry, today);
    if remaining <= 0 || remaining >= i64::from(estimate.days) {
        tracing::debug!(
            "Expiry hint {} ignored ({} days left, estimate {} days)",
            expiry,
            remaining,
            estimate.days
        );
        return estimate;
    }

    // 0 < remaining < days, so it fits in u32
    let capped = u32::try_from(remaining).unwrap_or(estimate.days);
    let mut estimate = estimate.note(format!(
        "Stated expiry date is {}; consume before then.",
        expiry.format("%Y-%m-%d")
    ));
    estimate.days = capped;
    estimate
}
