use crate::config::ModelSettings;
use crate::core::artifact::{load_artifact, ModelArtifact, ModelError};
use crate::models::{FeatureVector, PredictionMode};
use std::sync::Arc;
use thiserror::Error;

/// Fallback heuristic weights: liters per kg, per activity step, per weather step
pub const FALLBACK_WEIGHT_FACTOR: f64 = 0.03;
pub const FALLBACK_ACTIVITY_FACTOR: f64 = 0.5;
pub const FALLBACK_WEATHER_FACTOR: f64 = 0.3;

/// Errors that can occur when a loaded model is asked for a prediction
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("model inference failed: {0}")]
    Model(#[from] ModelError),

    #[error("model returned no output")]
    EmptyOutput,

    #[error("prediction is not a finite number: {0}")]
    NonFinite(f64),
}

/// Prediction mode, selected once at startup
#[derive(Clone)]
pub enum PredictorMode {
    Model(Arc<dyn ModelArtifact>),
    Fallback,
}

/// Turns feature vectors into rounded daily intake estimates
#[derive(Clone)]
pub struct Predictor {
    mode: PredictorMode,
}

impl Predictor {
    /// Build a predictor around an already-loaded artifact, or none
    pub fn new(artifact: Option<Arc<dyn ModelArtifact>>) -> Self {
        let mode = match artifact {
            Some(artifact) => PredictorMode::Model(artifact),
            None => PredictorMode::Fallback,
        };
        Self { mode }
    }

    /// Predictor that always uses the fallback heuristic
    pub fn fallback() -> Self {
        Self::new(None)
    }

    /// Attempt to load the configured artifact exactly once
    ///
    /// Any failure is logged and leaves the predictor in fallback mode for
    /// the rest of the process lifetime.
    pub fn load(settings: &ModelSettings) -> Self {
        match load_artifact(&settings.path) {
            Ok(artifact) => {
                tracing::info!("Model loaded successfully: {} ({})", artifact.name(), settings.path);
                Self::new(Some(artifact))
            }
            Err(e) => {
                tracing::warn!("Model unavailable ({}), using fallback heuristic", e);
                Self::fallback()
            }
        }
    }

    pub fn mode(&self) -> PredictionMode {
        match self.mode {
            PredictorMode::Model(_) => PredictionMode::Model,
            PredictorMode::Fallback => PredictionMode::Fallback,
        }
    }

    /// Predict daily intake in liters, rounded to two decimals
    pub fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        let artifact = match &self.mode {
            PredictorMode::Model(artifact) => Some(artifact.as_ref()),
            PredictorMode::Fallback => None,
        };
        predict(features, artifact)
    }
}

/// Predict from a feature vector with an optional model
///
/// A model error is returned as-is; it never switches to the heuristic.
pub fn predict(
    features: &FeatureVector,
    artifact: Option<&dyn ModelArtifact>,
) -> Result<f64, PredictionError> {
    let raw = match artifact {
        Some(model) => model
            .predict(&[features.as_slice()])?
            .first()
            .copied()
            .ok_or(PredictionError::EmptyOutput)?,
        None => fallback_estimate(features),
    };

    if !raw.is_finite() {
        return Err(PredictionError::NonFinite(raw));
    }

    Ok(round_liters(raw))
}

/// Deterministic heuristic used when no trained model is available
///
/// `weight * 0.03 + activity_code * 0.5 + weather_code * 0.3`
#[inline]
pub fn fallback_estimate(features: &FeatureVector) -> f64 {
    features.weight_kg() * FALLBACK_WEIGHT_FACTOR
        + features.activity_code() * FALLBACK_ACTIVITY_FACTOR
        + features.weather_code() * FALLBACK_WEATHER_FACTOR
}

/// Round to two decimal places on the exact decimal value of `value`
///
/// `1.7449999999999999` rounds to `1.74`. Scaling by 100 first would land it
/// on `174.5` and round up.
pub fn round_liters(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
