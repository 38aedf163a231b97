use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum PlantaError {
    #[error("La planta {0} ya existe.")]
    PlantaExiste(String),

    #[error("La planta {0} no existe.")]
    PlantaNoExiste(String),

    #[error("{0}")]
    DatoRequerido(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl PlantaError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PlantaError::PlantaExiste(_) => StatusCode::CONFLICT,
            PlantaError::PlantaNoExiste(_) => StatusCode::NOT_FOUND,
            PlantaError::DatoRequerido(_) => StatusCode::BAD_REQUEST,
            PlantaError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
