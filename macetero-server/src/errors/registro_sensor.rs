use axum::http::StatusCode;
use macetero_api::models::ClaveSensor;

#[derive(Debug, thiserror::Error)]
pub enum RegistroSensorError {
    #[error("El registro de sensor {0} no existe")]
    RegistroSensorNoExiste(i32),

    #[error("El sensor {clave} o la planta {nombre_planta} no existen.")]
    ReferenciaNoExiste {
        clave: ClaveSensor,
        nombre_planta: String,
    },

    #[error("{0}")]
    DatoRequerido(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl RegistroSensorError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RegistroSensorError::RegistroSensorNoExiste(_) => StatusCode::NOT_FOUND,
            RegistroSensorError::ReferenciaNoExiste { .. } => StatusCode::NOT_FOUND,
            RegistroSensorError::DatoRequerido(_) => StatusCode::BAD_REQUEST,
            RegistroSensorError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
