use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planta {
    /// Unique plant name
    pub nombre_planta: String,
    /// Species or family of the plant
    pub tipo_planta: String,
    pub descripcion: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub fecha_creacion: OffsetDateTime,
    /// Set once the plant stops being monitored
    #[serde(with = "time::serde::rfc3339::option")]
    pub fecha_eliminacion: Option<OffsetDateTime>,
}

impl Planta {
    pub fn new(nombre_planta: &str, tipo_planta: &str) -> Self {
        Self {
            nombre_planta: nombre_planta.to_string(),
            tipo_planta: tipo_planta.to_string(),
            descripcion: None,
            fecha_creacion: OffsetDateTime::now_utc(),
            fecha_eliminacion: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.fecha_eliminacion.is_none()
    }
}
