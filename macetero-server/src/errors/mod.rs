pub mod api;
pub mod consejo_planta;
pub mod planta;
pub mod query;
pub mod registro_sensor;
pub mod sensor;
pub mod sensor_planta;

pub use api::ApiError;
pub use consejo_planta::ConsejoPlantaError;
pub use planta::PlantaError;
pub use query::QueryError;
pub use registro_sensor::RegistroSensorError;
pub use sensor::SensorError;
pub use sensor_planta::SensorPlantaError;

use std::fmt::Display;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use uuid::Uuid;

fn internal_error(kind: &str, error: impl Display) -> (StatusCode, String, Option<String>) {
    let error_id = Uuid::new_v4();
    tracing::error!(error_id = ?error_id, "{}: {}", kind, error);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
        Some(error_id.to_string()),
    )
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Extract status code and error message from the specific error type
        let (status, error_message, log_message) = match self {
            ApiError::ConsejoPlantaError(ConsejoPlantaError::Database(e))
            | ApiError::PlantaError(PlantaError::Database(e))
            | ApiError::RegistroSensorError(RegistroSensorError::Database(e))
            | ApiError::SensorError(SensorError::Database(e))
            | ApiError::SensorPlantaError(SensorPlantaError::Database(e))
            | ApiError::DatabaseError(e) => internal_error("Database error", e),
            ApiError::ConsejoPlantaError(e) => (e.status_code(), e.to_string(), None),
            ApiError::PlantaError(e) => (e.status_code(), e.to_string(), None),
            ApiError::QueryError(e) => (e.status_code(), e.to_string(), None),
            ApiError::RegistroSensorError(e) => (e.status_code(), e.to_string(), None),
            ApiError::SensorError(e) => (e.status_code(), e.to_string(), None),
            ApiError::SensorPlantaError(e) => (e.status_code(), e.to_string(), None),
            ApiError::QueryRejection(e) => (e.status(), e.body_text(), None),
            ApiError::PathRejection(e) => (e.status(), e.body_text(), None),
            ApiError::InternalError(e) => internal_error("Internal error", e),
        };

        // Create a consistent JSON error response
        let mut error_obj = json!({
            "code": status.as_u16(),
            "message": error_message
        });

        // Add error_id if available (for internal errors)
        if let Some(error_id) = log_message {
            error_obj["error_id"] = json!(error_id);
        }

        let body = Json(json!({
            "error": error_obj
        }));

        (status, body).into_response()
    }
}
