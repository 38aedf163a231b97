use axum::http::StatusCode;
use macetero_api::models::ClaveSensor;

#[derive(Debug, thiserror::Error)]
pub enum SensorError {
    #[error("El sensor {0} ya existe.")]
    SensorExiste(ClaveSensor),

    #[error("El sensor {0} no existe")]
    SensorNoExiste(ClaveSensor),

    #[error("{0}")]
    DatoRequerido(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl SensorError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SensorError::SensorExiste(_) => StatusCode::CONFLICT,
            SensorError::SensorNoExiste(_) => StatusCode::NOT_FOUND,
            SensorError::DatoRequerido(_) => StatusCode::BAD_REQUEST,
            SensorError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
