//! Input and output types for the estimation pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::classifier::FoodCategory;
use crate::validation::InputError;

/// Storage environment reading.
///
/// Humidity is expected in `[0, 100]`; temperature has no enforced range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentInput {
    pub temperature_c: f64,
    pub humidity_pct: f64,
}

impl EnvironmentInput {
    pub fn new(temperature_c: f64, humidity_pct: f64) -> Self {
        Self {
            temperature_c,
            humidity_pct,
        }
    }
}

/// How the food is being stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageMethod {
    Frozen,
    Refrigerated,
    RoomTemperature,
    Unspecified,
}

impl StorageMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageMethod::Frozen => "frozen",
            StorageMethod::Refrigerated => "refrigerated",
            StorageMethod::RoomTemperature => "room_temperature",
            StorageMethod::Unspecified => "unspecified",
        }
    }
}

impl FromStr for StorageMethod {
    type Err = InputError;

    /// Accepts `room_temperature`, `room-temperature` and `room temperature`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "frozen" => Ok(StorageMethod::Frozen),
            "refrigerated" => Ok(StorageMethod::Refrigerated),
            "room_temperature" => Ok(StorageMethod::RoomTemperature),
            "unspecified" => Ok(StorageMethod::Unspecified),
            _ => Err(InputError::UnknownStorageMethod(s.to_string())),
        }
    }
}

/// Packaging state of the food
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackagingType {
    Sealed,
    Opened,
    Loose,
    Unspecified,
}

impl PackagingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackagingType::Sealed => "sealed",
            PackagingType::Opened => "opened",
            PackagingType::Loose => "loose",
            PackagingType::Unspecified => "unspecified",
        }
    }
}

impl FromStr for PackagingType {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sealed" => Ok(PackagingType::Sealed),
            "opened" => Ok(PackagingType::Opened),
            "loose" => Ok(PackagingType::Loose),
            "unspecified" => Ok(PackagingType::Unspecified),
            _ => Err(InputError::UnknownPackagingType(s.to_string())),
        }
    }
}

/// Final estimate for one pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub category: FoodCategory,
    /// Remaining shelf life, always at least 1
    pub days: u32,
    /// Heuristic reliability score in [50, 95]
    pub confidence: u8,
    pub advisory: String,
}

/// Validated prediction request, as produced by [`crate::validation::validate`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub food_name: String,
    pub environment: EnvironmentInput,
    pub storage: Option<StorageMethod>,
    pub packaging: Option<PackagingType>,
    pub expiry: Option<NaiveDate>,
}

impl PredictionRequest {
    pub fn new(food_name: impl Into<String>, environment: EnvironmentInput) -> Self {
        Self {
            food_name: food_name.into(),
            environment,
            storage: None,
            packaging: None,
            expiry: None,
        }
    }

    pub fn with_storage(mut self, storage: StorageMethod) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn with_packaging(mut self, packaging: PackagingType) -> Self {
        self.packaging = Some(packaging);
        self
    }

    pub fn with_expiry(mut self, expiry: NaiveDate) -> Self {
        self.expiry = Some(expiry);
        self
    }
}
