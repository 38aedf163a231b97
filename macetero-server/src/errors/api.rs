use axum::extract::rejection::{PathRejection, QueryRejection};

use super::{
    ConsejoPlantaError, PlantaError, QueryError, RegistroSensorError, SensorError,
    SensorPlantaError,
};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Consejo error: {0}")]
    ConsejoPlantaError(#[from] ConsejoPlantaError),

    #[error("Planta error: {0}")]
    PlantaError(#[from] PlantaError),

    #[error("Query error: {0}")]
    QueryError(#[from] QueryError),

    #[error("Registro error: {0}")]
    RegistroSensorError(#[from] RegistroSensorError),

    #[error("Sensor error: {0}")]
    SensorError(#[from] SensorError),

    #[error("Sensor planta error: {0}")]
    SensorPlantaError(#[from] SensorPlantaError),

    #[error("Query rejection: {0}")]
    QueryRejection(#[from] QueryRejection),

    #[error("Path rejection: {0}")]
    PathRejection(#[from] PathRejection),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}
