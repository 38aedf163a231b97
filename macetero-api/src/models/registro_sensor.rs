use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{ClaveSensor, Id, TipoSensor, ZonaSensor};

/// A single timestamped reading.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistroSensor {
    /// Surrogate identifier, zero until stored
    pub id: Id,
    pub tipo_sensor: TipoSensor,
    pub zona_sensor: ZonaSensor,
    pub numero_sensor: i32,
    pub valor: f64,
    /// Scale the value is expressed in, e.g. `C` or `%`
    pub escala: String,
    pub nombre_planta: String,
    #[serde(with = "time::serde::rfc3339")]
    pub fecha: OffsetDateTime,
}

impl RegistroSensor {
    pub fn new(
        clave: ClaveSensor,
        valor: f64,
        escala: &str,
        nombre_planta: &str,
        fecha: OffsetDateTime,
    ) -> Self {
        Self {
            id: 0,
            tipo_sensor: clave.tipo_sensor,
            zona_sensor: clave.zona_sensor,
            numero_sensor: clave.numero_sensor,
            valor,
            escala: escala.to_string(),
            nombre_planta: nombre_planta.to_string(),
            fecha: crate::fecha::to_utc(fecha),
        }
    }

    pub fn clave(&self) -> ClaveSensor {
        ClaveSensor::new(self.tipo_sensor, self.zona_sensor, self.numero_sensor)
    }
}
