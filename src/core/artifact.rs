use crate::models::{FEATURE_COUNT, FEATURE_NAMES};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by a loaded model during inference
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("feature length mismatch: got {got}, expected {expected}")]
    DimensionMismatch { got: usize, expected: usize },

    #[error("model produced a non-finite value")]
    NonFinite,

    #[error("{0}")]
    Other(String),
}

/// Errors that can occur while loading the artifact at startup
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("model file '{0}' not found")]
    NotFound(PathBuf),

    #[error("failed to read model file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse model file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("model schema mismatch: {0}")]
    Schema(String),
}

/// A pre-trained regression model, shared read-only across requests
pub trait ModelArtifact: Send + Sync {
    /// Run inference on a batch of rows, returning one value per row
    fn predict(&self, rows: &[&[f64]]) -> Result<Vec<f64>, ModelError>;

    /// Column names the model was trained with, in training order
    fn feature_names(&self) -> Option<&[String]> {
        None
    }

    /// Get model name/type
    fn name(&self) -> &str;
}

/// Ordinary least squares model serialized as JSON
///
/// ```json
/// {
///   "feature_names": ["Age", "Gender", "Weight (kg)", "Physical Activity Level", "Weather"],
///   "coefficients": [0.001, 0.12, 0.03, 0.45, 0.31],
///   "intercept": 0.2
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    #[serde(default)]
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    #[serde(default)]
    pub intercept: f64,
}

impl LinearModel {
    pub fn from_json(json: &str) -> Result<Self, ModelLoadError> {
        let model: LinearModel = serde_json::from_str(json)?;
        Ok(model)
    }

    fn predict_row(&self, row: &[f64]) -> Result<f64, ModelError> {
        if row.len() != self.coefficients.len() {
            return Err(ModelError::DimensionMismatch {
                got: row.len(),
                expected: self.coefficients.len(),
            });
        }

        let value = self
            .coefficients
            .iter()
            .zip(row)
            .fold(self.intercept, |acc, (w, x)| acc + w * x);

        if value.is_finite() {
            Ok(value)
        } else {
            Err(ModelError::NonFinite)
        }
    }
}

impl ModelArtifact for LinearModel {
    fn predict(&self, rows: &[&[f64]]) -> Result<Vec<f64>, ModelError> {
        rows.iter().map(|row| self.predict_row(row)).collect()
    }

    fn feature_names(&self) -> Option<&[String]> {
        if self.feature_names.is_empty() {
            None
        } else {
            Some(&self.feature_names)
        }
    }

    fn name(&self) -> &str {
        "linear_regression"
    }
}

/// Check an artifact against the encoder's column layout
///
/// Declared feature names must match the canonical order exactly. A model
/// without declared names is probed with one zero row to confirm it accepts
/// a vector of the expected width.
pub fn check_schema(artifact: &dyn ModelArtifact) -> Result<(), ModelLoadError> {
    if let Some(names) = artifact.feature_names() {
        if names.len() != FEATURE_COUNT
            || names.iter().zip(FEATURE_NAMES.iter()).any(|(a, b)| a != b)
        {
            return Err(ModelLoadError::Schema(format!(
                "expected features {:?}, artifact declares {:?}",
                FEATURE_NAMES, names
            )));
        }
    }

    let probe = [0.0; FEATURE_COUNT];
    let output = artifact
        .predict(&[&probe[..]])
        .map_err(|e| ModelLoadError::Schema(e.to_string()))?;
    if output.len() != 1 {
        return Err(ModelLoadError::Schema(format!(
            "expected one output per row, got {}",
            output.len()
        )));
    }

    Ok(())
}

/// Load and validate a JSON linear model from disk
pub fn load_artifact<P: AsRef<Path>>(path: P) -> Result<Arc<dyn ModelArtifact>, ModelLoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ModelLoadError::NotFound(path.to_path_buf()));
    }

    let json = std::fs::read_to_string(path)?;
    let model = LinearModel::from_json(&json)?;
    check_schema(&model)?;

    Ok(Arc::new(model))
}
