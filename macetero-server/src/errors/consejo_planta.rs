use axum::http::StatusCode;
use macetero_api::models::{TipoMedida, ZonaSensor};

#[derive(Debug, thiserror::Error)]
pub enum ConsejoPlantaError {
    #[error(
        "El consejo de la planta {nombre_planta} para la medida {tipo_medida} en la zona {zona_consejo} ya está registrado."
    )]
    ConsejoPlantaExiste {
        nombre_planta: String,
        zona_consejo: ZonaSensor,
        tipo_medida: TipoMedida,
    },

    #[error(
        "El consejo de la planta {nombre_planta} para la medida {tipo_medida} en la zona {zona_consejo} no existe."
    )]
    ConsejoPlantaNoExiste {
        nombre_planta: String,
        zona_consejo: ZonaSensor,
        tipo_medida: TipoMedida,
    },

    #[error("{0}")]
    DatoRequerido(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ConsejoPlantaError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ConsejoPlantaError::ConsejoPlantaExiste { .. } => StatusCode::CONFLICT,
            ConsejoPlantaError::ConsejoPlantaNoExiste { .. } => StatusCode::NOT_FOUND,
            ConsejoPlantaError::DatoRequerido(_) => StatusCode::BAD_REQUEST,
            ConsejoPlantaError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
