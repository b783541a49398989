use crate::estimator::Prediction;

/// JSON formatter for predictions
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format prediction as pretty-printed JSON
    pub fn format(prediction: &Prediction) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(prediction)
    }

    /// Format prediction as compact JSON (no whitespace)
    pub fn format_compact(prediction: &Prediction) -> Result<String, serde_json::Error> {
        serde_json::to_string(prediction)
    }
}
