// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{FeatureVector, PredictionMode, FEATURE_COUNT, FEATURE_NAMES};
pub use requests::PredictionRequest;
pub use responses::{PredictionResponse, RootResponse, HealthResponse, ErrorResponse, FieldError};
