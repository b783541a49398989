// Axum API Server Module
//
// Purpose: REST API exposing the classifier and estimation pipeline to an external UI
// All handlers are stateless apart from configuration; nothing is cached or persisted.

#[cfg(feature = "api")]
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

#[cfg(feature = "api")]
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};

#[cfg(feature = "api")]
use std::sync::Arc;

#[cfg(feature = "api")]
use crate::classifier::classify;

#[cfg(feature = "api")]
use crate::estimator::{predict_batch, predict_on, today, Prediction};

#[cfg(feature = "api")]
use crate::validation::{validate, InputError, RawPredictionInput};

// ============================================================================
// Application State
// ============================================================================

/// Default upper bound on items per batch request
#[cfg(feature = "api")]
pub const DEFAULT_MAX_BATCH_SIZE: usize = 100;

/// Server configuration (read from the environment by the binary)
#[cfg(feature = "api")]
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub max_batch_size: usize,
}

#[cfg(feature = "api")]
impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
        }
    }
}

#[cfg(feature = "api")]
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ApiConfig>,
}

#[cfg(feature = "api")]
impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        tracing::info!("Max batch size: {}", config.max_batch_size);
        Self {
            config: Arc::new(config),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

#[cfg(feature = "api")]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Classification
        .route("/api/classify", get(classify_food))

        // Prediction endpoints
        .route("/api/predict/batch", post(predict_food_batch))
        .route("/api/predict", post(predict_food))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

#[cfg(feature = "api")]
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[cfg(feature = "api")]
async fn classify_food(
    Query(params): Query<ClassifyParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let name = params.name.unwrap_or_default();
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("Please provide a food name".to_string()));
    }

    let category = classify(&name);
    tracing::debug!("Classified '{}' as {}", name, category);

    Ok(Json(serde_json::json!({
        "name": name,
        "category": category,
    })))
}

#[cfg(feature = "api")]
async fn predict_food(
    payload: Result<Json<RawPredictionInput>, JsonRejection>,
) -> Result<Json<Prediction>, AppError> {
    let Json(payload) = payload?;
    let request = validate(&payload).map_err(|e| {
        tracing::warn!("Rejected prediction input: {:?}", e);
        AppError::from(e)
    })?;

    tracing::info!("Predicting shelf life for '{}'", request.food_name);

    // Date is read once per request so the whole computation sees the same day
    let day = today();
    let prediction = tokio::task::spawn_blocking(move || predict_on(&request, day))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    Ok(Json(prediction))
}

#[cfg(feature = "api")]
async fn predict_food_batch(
    State(state): State<AppState>,
    payload: Result<Json<BatchPredictRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(payload) = payload?;
    let max = state.config.max_batch_size;
    if payload.items.len() > max {
        return Err(AppError::BadRequest(format!(
            "Batch of {} items exceeds the maximum of {}",
            payload.items.len(),
            max
        )));
    }

    // Reject the whole batch on the first invalid item
    let requests = payload
        .items
        .iter()
        .enumerate()
        .map(|(idx, raw)| {
            validate(raw).map_err(|e| AppError::BadRequest(format!("item {}: {}", idx, e)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let start = std::time::Instant::now();
    let count = requests.len();

    let day = today();
    let results = tokio::task::spawn_blocking(move || predict_batch(&requests, day))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    tracing::info!("Batch prediction: {} items in {:?}", count, start.elapsed());

    Ok(Json(serde_json::json!({
        "count": count,
        "results": results,
    })))
}

// ============================================================================
// Request Types
// ============================================================================

#[cfg(feature = "api")]
#[derive(serde::Deserialize)]
struct ClassifyParams {
    name: Option<String>,
}

#[cfg(feature = "api")]
#[derive(serde::Deserialize)]
struct BatchPredictRequest {
    #[serde(default)]
    items: Vec<RawPredictionInput>,
}

// ============================================================================
// Error Handling
// ============================================================================

#[cfg(feature = "api")]
#[derive(Debug)]
enum AppError {
    BadRequest(String),
    Internal(String),
}

#[cfg(feature = "api")]
impl From<InputError> for AppError {
    fn from(err: InputError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

#[cfg(feature = "api")]
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        AppError::BadRequest(rejection.body_text())
    }
}

#[cfg(feature = "api")]
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
