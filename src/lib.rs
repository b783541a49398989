//! Shelf Life Predictor
//!
//! Estimates remaining shelf life for a named food item from storage
//! temperature, humidity, and optional storage method, packaging and
//! stated expiry date.
//!
//! Two components, evaluated leaf-first:
//! - `classifier`: free-text food name → category (keyword substring match)
//! - `adjustments/` + `estimator`: category + conditions → days, confidence, advisory
//!
//! Supporting modules:
//! - `validation`: raw form input → typed request (the core does not re-validate)
//! - `report`: markdown / JSON rendering of a prediction
//! - `api_server`: axum HTTP surface (feature `api`)

pub mod classifier;
pub mod types;
pub mod adjustments;
pub mod estimator;
pub mod validation;
pub mod report;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use classifier::{classify, FoodCategory};
pub use types::{EnvironmentInput, PackagingType, PredictionRequest, PredictionResult, StorageMethod};
pub use estimator::{estimate, estimate_on, predict, predict_batch, predict_on, Prediction};
pub use validation::{validate, InputError, RawPredictionInput};

#[cfg(feature = "api")]
pub use api_server::{create_router, ApiConfig, AppState, DEFAULT_MAX_BATCH_SIZE};
