use actix_web::{web, HttpResponse, Responder};
use validator::{Validate, ValidationErrors};
use crate::core::{encode, Predictor};
use crate::models::{ErrorResponse, FieldError, HealthResponse, PredictionRequest, PredictionResponse, RootResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub predictor: Predictor,
}

/// Configure all prediction-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(root))
        .route("/health", web::get().to(health_check))
        .route("/predict", web::post().to(predict));
}

async fn root() -> impl Responder {
    HttpResponse::Ok().json(RootResponse {
        message: "Water Intake Prediction API".to_string(),
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        mode: state.predictor.mode(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Predict daily water intake
///
/// POST /predict
///
/// Request body:
/// ```json
/// {
///   "Age": 25,
///   "Gender": "Male",
///   "Weight": 70,
///   "ActivityLevel": "High",
///   "Weather": "Hot"
/// }
/// ```
async fn predict(
    state: web::Data<AppState>,
    req: web::Json<PredictionRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for predict request: {}", errors);
        return HttpResponse::BadRequest().json(
            ErrorResponse::new("Validation failed", errors.to_string(), 400)
                .with_fields(field_errors(&req, &errors)),
        );
    }

    let features = match encode(&req) {
        Ok(features) => features,
        Err(e) => {
            tracing::info!("Rejected predict request: {}", e);
            return HttpResponse::BadRequest().json(
                ErrorResponse::new("Invalid category", e.to_string(), 400)
                    .with_fields(e.field_errors()),
            );
        }
    };

    match state.predictor.predict(&features) {
        Ok(liters) => {
            tracing::debug!(
                "Predicted {} L ({} mode) for features {:?}",
                liters,
                state.predictor.mode(),
                features.as_slice()
            );
            HttpResponse::Ok().json(PredictionResponse {
                daily_water_intake_liters: liters,
            })
        }
        Err(e) => {
            tracing::error!("Prediction failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "Prediction failed",
                e.to_string(),
                500,
            ))
        }
    }
}

fn field_errors(req: &PredictionRequest, errors: &ValidationErrors) -> Vec<FieldError> {
    errors
        .field_errors()
        .keys()
        .map(|field| {
            let (name, value) = match &**field {
                "age" | "Age" => ("Age", req.age.to_string()),
                "weight" | "Weight" => ("Weight", req.weight.to_string()),
                other => (other, String::new()),
            };
            FieldError {
                field: name.to_string(),
                value,
                allowed: Vec::new(),
            }
        })
        .collect()
}
