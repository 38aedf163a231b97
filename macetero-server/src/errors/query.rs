use axum::http::StatusCode;

/// Rejections of request parameters, raised before any storage access.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("El tipo de sensor {0} no existe.")]
    TipoSensorNoExiste(String),

    #[error("La zona de sensor {0} no existe.")]
    ZonaSensorNoExiste(String),

    #[error("El tipo de medida {0} no existe.")]
    TipoMedidaNoExiste(String),

    #[error("El modelo de sensor {0} no existe.")]
    ModeloSensorNoExiste(String),

    #[error("Error en el formato de la fecha de inicio {0} .")]
    FechaInicioInvalida(String),

    #[error("Error en el formato de la fecha de fin {0} .")]
    FechaFinInvalida(String),

    #[error("La fecha de inicio {inicio} no puede ser mayor que la fecha de fin {fin} .")]
    RangoFechasInvalido { inicio: String, fin: String },
}

impl QueryError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::NOT_ACCEPTABLE
    }
}
