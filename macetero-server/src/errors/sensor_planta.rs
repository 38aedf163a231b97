use axum::http::StatusCode;
use macetero_api::models::ClaveSensor;

#[derive(Debug, thiserror::Error)]
pub enum SensorPlantaError {
    #[error("El sensor {clave} ya está asociado a la planta {nombre_planta}.")]
    SensorPlantaExiste {
        clave: ClaveSensor,
        nombre_planta: String,
    },

    #[error("El sensor {clave} no está asociado a la planta {nombre_planta}.")]
    SensorPlantaNoExiste {
        clave: ClaveSensor,
        nombre_planta: String,
    },

    #[error("El sensor {clave} o la planta {nombre_planta} no existen.")]
    ReferenciaNoExiste {
        clave: ClaveSensor,
        nombre_planta: String,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl SensorPlantaError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SensorPlantaError::SensorPlantaExiste { .. } => StatusCode::CONFLICT,
            SensorPlantaError::SensorPlantaNoExiste { .. } => StatusCode::NOT_FOUND,
            SensorPlantaError::ReferenciaNoExiste { .. } => StatusCode::NOT_FOUND,
            SensorPlantaError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
