//! Input Validation
//!
//! Turns raw form input (strings, as a UI would submit them) into a typed
//! [`PredictionRequest`]. The estimation core assumes its inputs already
//! passed through here and does not re-check them.
//!
//! Checks, in order:
//! 1. Food name, temperature and humidity must be present and non-blank
//! 2. Temperature and humidity must be finite numbers
//! 3. Humidity must lie in [0, 100]
//! 4. Optional storage / packaging / expiry must parse when given
//!
//! Temperature has no range check.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{EnvironmentInput, PackagingType, PredictionRequest, StorageMethod};

/// Why raw input was rejected. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Please fill in all fields")]
    MissingField { field: &'static str },

    #[error("Please enter valid numbers for temperature and humidity")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Humidity must be between 0 and 100%")]
    HumidityOutOfRange { value: f64 },

    #[error("Unknown storage method '{0}' (expected frozen, refrigerated, room_temperature or unspecified)")]
    UnknownStorageMethod(String),

    #[error("Unknown packaging type '{0}' (expected sealed, opened, loose or unspecified)")]
    UnknownPackagingType(String),

    #[error("Expiry date '{0}' is not a valid YYYY-MM-DD date")]
    InvalidExpiryDate(String),
}

/// A numeric form field, accepted either as a JSON number or as text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        RawNumber::Number(value)
    }
}

impl From<&str> for RawNumber {
    fn from(value: &str) -> Self {
        RawNumber::Text(value.to_string())
    }
}

/// Unvalidated prediction input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPredictionInput {
    #[serde(default)]
    pub food_name: String,
    #[serde(default)]
    pub temperature: Option<RawNumber>,
    #[serde(default)]
    pub humidity: Option<RawNumber>,
    #[serde(default)]
    pub storage: Option<String>,
    #[serde(default)]
    pub packaging: Option<String>,
    #[serde(default)]
    pub expiry: Option<String>,
}

/// Validate raw input into a typed request
pub fn validate(raw: &RawPredictionInput) -> Result<PredictionRequest, InputError> {
    let food_name = raw.food_name.trim();
    if food_name.is_empty() {
        return Err(InputError::MissingField { field: "food_name" });
    }

    // All presence checks come before any number parsing
    let temperature = require(raw.temperature.as_ref(), "temperature")?;
    let humidity = require(raw.humidity.as_ref(), "humidity")?;

    let temperature_c = parse_number(temperature, "temperature")?;
    let humidity_pct = parse_number(humidity, "humidity")?;

    if !(0.0..=100.0).contains(&humidity_pct) {
        return Err(InputError::HumidityOutOfRange { value: humidity_pct });
    }

    let storage = non_blank(raw.storage.as_deref())
        .map(str::parse::<StorageMethod>)
        .transpose()?;
    let packaging = non_blank(raw.packaging.as_deref())
        .map(str::parse::<PackagingType>)
        .transpose()?;
    let expiry = non_blank(raw.expiry.as_deref())
        .map(parse_expiry)
        .transpose()?;

    Ok(PredictionRequest {
        food_name: food_name.to_string(),
        environment: EnvironmentInput::new(temperature_c, humidity_pct),
        storage,
        packaging,
        expiry,
    })
}

/// Parse an ISO `YYYY-MM-DD` expiry date
pub fn parse_expiry(value: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| InputError::InvalidExpiryDate(value.to_string()))
}

fn require<'a>(value: Option<&'a RawNumber>, field: &'static str) -> Result<&'a RawNumber, InputError> {
    match value {
        Some(RawNumber::Text(text)) if text.trim().is_empty() => Err(InputError::MissingField { field }),
        Some(number) => Ok(number),
        None => Err(InputError::MissingField { field }),
    }
}

fn parse_number(value: &RawNumber, field: &'static str) -> Result<f64, InputError> {
    let parsed = match value {
        RawNumber::Number(n) => Some(*n),
        RawNumber::Text(text) => text.trim().parse::<f64>().ok(),
    };

    match parsed {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(InputError::InvalidNumber {
            field,
            value: match value {
                RawNumber::Number(n) => n.to_string(),
                RawNumber::Text(text) => text.clone(),
            },
        }),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn raw(food: &str, temp: &str, hum: &str) -> RawPredictionInput {
        RawPredictionInput {
            food_name: food.to_string(),
            temperature: Some(temp.into()),
            humidity: Some(hum.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_minimal_input() {
        let request = validate(&raw("  Milk ", "4", "60.5")).unwrap();
        assert_eq!(request.food_name, "Milk");
        assert_relative_eq!(request.environment.temperature_c, 4.0);
        assert_relative_eq!(request.environment.humidity_pct, 60.5);
        assert_eq!(request.storage, None);
        assert_eq!(request.packaging, None);
        assert_eq!(request.expiry, None);
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            validate(&raw("", "4", "60")),
            Err(InputError::MissingField { field: "food_name" })
        );
        assert_eq!(
            validate(&raw("milk", " ", "60")),
            Err(InputError::MissingField { field: "temperature" })
        );

        let mut input = raw("milk", "4", "60");
        input.humidity = None;
        assert_eq!(validate(&input), Err(InputError::MissingField { field: "humidity" }));
        assert_eq!(
            validate(&input).unwrap_err().to_string(),
            "Please fill in all fields"
        );
    }

    #[test]
    fn test_presence_checked_before_numbers() {
        // Bad temperature but missing humidity: missing wins
        let mut input = raw("milk", "warm", "60");
        input.humidity = None;
        assert!(matches!(validate(&input), Err(InputError::MissingField { .. })));
    }

    #[test]
    fn test_invalid_numbers() {
        let err = validate(&raw("milk", "warm", "60")).unwrap_err();
        assert!(matches!(err, InputError::InvalidNumber { field: "temperature", .. }));
        assert_eq!(
            err.to_string(),
            "Please enter valid numbers for temperature and humidity"
        );

        assert!(matches!(
            validate(&raw("milk", "4", "NaN")),
            Err(InputError::InvalidNumber { field: "humidity", .. })
        ));
        assert!(matches!(
            validate(&raw("milk", "inf", "50")),
            Err(InputError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_humidity_range() {
        assert!(validate(&raw("milk", "4", "0")).is_ok());
        assert!(validate(&raw("milk", "4", "100")).is_ok());

        let err = validate(&raw("milk", "4", "100.1")).unwrap_err();
        assert_eq!(err.to_string(), "Humidity must be between 0 and 100%");
        assert!(matches!(
            validate(&raw("milk", "4", "-1")),
            Err(InputError::HumidityOutOfRange { .. })
        ));
    }

    #[test]
    fn test_temperature_is_not_range_checked() {
        let request = validate(&raw("milk", "-200", "50")).unwrap();
        assert_relative_eq!(request.environment.temperature_c, -200.0);
    }

    #[test]
    fn test_optional_fields() {
        let mut input = raw("bread", "20", "50");
        input.storage = Some("Room Temperature".to_string());
        input.packaging = Some("sealed".to_string());
        input.expiry = Some("2025-12-31".to_string());

        let request = validate(&input).unwrap();
        assert_eq!(request.storage, Some(StorageMethod::RoomTemperature));
        assert_eq!(request.packaging, Some(PackagingType::Sealed));
        assert_eq!(request.expiry, NaiveDate::from_ymd_opt(2025, 12, 31));
    }

    #[test]
    fn test_blank_optional_fields_are_absent() {
        let mut input = raw("bread", "20", "50");
        input.storage = Some(String::new());
        input.packaging = Some("  ".to_string());
        input.expiry = Some(String::new());

        let request = validate(&input).unwrap();
        assert_eq!(request.storage, None);
        assert_eq!(request.packaging, None);
        assert_eq!(request.expiry, None);
    }

    #[test]
    fn test_bad_optional_fields() {
        let mut input = raw("bread", "20", "50");
        input.expiry = Some("31/12/2025".to_string());
        assert_eq!(
            validate(&input),
            Err(InputError::InvalidExpiryDate("31/12/2025".to_string()))
        );

        let mut input = raw("bread", "20", "50");
        input.packaging = Some("vacuum".to_string());
        assert_eq!(
            validate(&input),
            Err(InputError::UnknownPackagingType("vacuum".to_string()))
        );
    }

    #[test]
    fn test_json_accepts_numbers_or_strings() {
        let input: RawPredictionInput = serde_json::from_str(
            r#"{"food_name": "apple", "temperature": 22.5, "humidity": "70"}"#,
        )
        .unwrap();
        let request = validate(&input).unwrap();
        assert_relative_eq!(request.environment.temperature_c, 22.5);
        assert_relative_eq!(request.environment.humidity_pct, 70.0);
    }
}
