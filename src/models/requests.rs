use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to estimate daily water intake
///
/// Categorical fields are kept as raw strings here; they are checked against
/// the encoding tables by the encoder so that an unknown label is reported
/// per field instead of as a generic JSON error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PredictionRequest {
    #[validate(range(min = 0))]
    #[serde(rename = "Age")]
    pub age: i64,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[validate(range(exclusive_min = 0.0))]
    #[serde(rename = "Weight")]
    pub weight: f64,
    #[serde(rename = "ActivityLevel")]
    pub activity_level: String,
    #[serde(rename = "Weather")]
    pub weather: String,
}
