use serde::{Deserialize, Serialize};

/// Number of columns the regression model is trained on
pub const FEATURE_COUNT: usize = 5;

/// Column names in the order the model artifact expects them
///
/// Any artifact loaded at startup must declare exactly these names in exactly
/// this order. Reordering the vector without retraining produces wrong
/// predictions without raising an error.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Age",
    "Gender",
    "Weight (kg)",
    "Physical Activity Level",
    "Weather",
];

/// Encoded model input: `[age, gender_code, weight, activity_code, weather_code]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(age: f64, gender_code: u8, weight_kg: f64, activity_code: u8, weather_code: u8) -> Self {
        Self([
            age,
            gender_code as f64,
            weight_kg,
            activity_code as f64,
            weather_code as f64,
        ])
    }

    pub fn age(&self) -> f64 {
        self.0[0]
    }

    pub fn gender_code(&self) -> f64 {
        self.0[1]
    }

    pub fn weight_kg(&self) -> f64 {
        self.0[2]
    }

    pub fn activity_code(&self) -> f64 {
        self.0[3]
    }

    pub fn weather_code(&self) -> f64 {
        self.0[4]
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// Which path produced a prediction, fixed once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionMode {
    Model,
    Fallback,
}

impl std::fmt::Display for PredictionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PredictionMode::Model => write!(f, "model"),
            PredictionMode::Fallback => write!(f, "fallback"),
        }
    }
}
