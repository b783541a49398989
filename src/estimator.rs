//! Shelf Life Estimator - coordinator for the adjustment pipeline
//!
//! Folds the adjustment steps in their fixed order and exposes the
//! caller-facing entry points, including a parallel (Rayon) batch variant.
//!
//! Everything here is pure apart from `estimate` and `predict`, which read
//! the local date for expiry reconciliation. The `_on` variants take the
//! date explicitly and are fully deterministic.

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::adjustments::*;
use crate::classifier::{classify, FoodCategory};
use crate::types::{PackagingType, PredictionRequest, PredictionResult, StorageMethod};

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Estimate remaining shelf life for a category, using today's date for
/// expiry reconciliation.
pub fn estimate(
    category: FoodCategory,
    temperature_c: f64,
    humidity_pct: f64,
    storage: Option<StorageMethod>,
    packaging: Option<PackagingType>,
    expiry: Option<NaiveDate>,
) -> PredictionResult {
    estimate_on(category, temperature_c, humidity_pct, storage, packaging, expiry, today())
}

/// Estimate remaining shelf life as of `today`.
///
/// Step order is fixed; see [`crate::adjustments`].
pub fn estimate_on(
    category: FoodCategory,
    temperature_c: f64,
    humidity_pct: f64,
    storage: Option<StorageMethod>,
    packaging: Option<PackagingType>,
    expiry: Option<NaiveDate>,
    today: NaiveDate,
) -> PredictionResult {
    let estimate = base_estimate(category);
    tracing::debug!("{}: base {} days, confidence {}", category, estimate.days, estimate.confidence);

    let estimate = adjust_for_storage(estimate, storage);
    let estimate = adjust_for_packaging(estimate, packaging);
    tracing::debug!(
        "{}: after storage {:?} / packaging {:?}: {} days, confidence {}",
        category, storage, packaging, estimate.days, estimate.confidence
    );

    let estimate = adjust_for_temperature(estimate, temperature_c);
    let estimate = adjust_for_humidity(estimate, humidity_pct);
    tracing::debug!(
        "{}: after {}°C / {}% RH: {} days, confidence {}",
        category, temperature_c, humidity_pct, estimate.days, estimate.confidence
    );

    let estimate = reconcile_expiry(estimate, expiry, today);

    estimate.finish(category)
}

/// Named prediction, as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub food_name: String,
    #[serde(flatten)]
    pub result: PredictionResult,
}

/// Classify and estimate a validated request using today's date
pub fn predict(request: &PredictionRequest) -> Prediction {
    predict_on(request, today())
}

/// Classify and estimate a validated request as of `today`
pub fn predict_on(request: &PredictionRequest, today: NaiveDate) -> Prediction {
    let category = classify(&request.food_name);
    let result = estimate_on(
        category,
        request.environment.temperature_c,
        request.environment.humidity_pct,
        request.storage,
        request.packaging,
        request.expiry,
        today,
    );

    Prediction {
        food_name: request.food_name.clone(),
        result,
    }
}

/// Predict a batch of independent requests in parallel.
///
/// Output order matches input order and equals sequential evaluation.
pub fn predict_batch(requests: &[PredictionRequest], today: NaiveDate) -> Vec<Prediction> {
    requests
        .par_iter()
        .map(|request| predict_on(request, today))
        .collect()
}
