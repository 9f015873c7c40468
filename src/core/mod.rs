// Core pipeline exports
pub mod artifact;
pub mod encoder;
pub mod predictor;

pub use artifact::{check_schema, load_artifact, LinearModel, ModelArtifact, ModelError, ModelLoadError};
pub use encoder::{encode, CategoryEncoding, EncodingError, InvalidCategory, ACTIVITY_LEVEL, GENDER, WEATHER};
pub use predictor::{fallback_estimate, predict, round_liters, PredictionError, Predictor, PredictorMode};
