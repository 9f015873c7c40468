//! Water Intake - daily water intake prediction service
//!
//! This library provides the request-to-prediction pipeline: categorical
//! inputs are encoded into the fixed-order feature vector the trained
//! regression model expects, then scored by that model or, when no model
//! could be loaded at startup, by a deterministic fallback heuristic.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use core::{encode, EncodingError, ModelArtifact, PredictionError, Predictor};
pub use models::{FeatureVector, PredictionMode, PredictionRequest, PredictionResponse};
