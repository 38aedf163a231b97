use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{ClaveSensor, TipoSensor, ZonaSensor};

/// Association between a sensor and the plant it monitors.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPlanta {
    pub tipo_sensor: TipoSensor,
    pub zona_sensor: ZonaSensor,
    pub numero_sensor: i32,
    pub nombre_planta: String,
    #[serde(with = "time::serde::rfc3339")]
    pub fecha_asociacion: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub fecha_eliminacion: Option<OffsetDateTime>,
}

impl SensorPlanta {
    pub fn clave_sensor(&self) -> ClaveSensor {
        ClaveSensor::new(self.tipo_sensor, self.zona_sensor, self.numero_sensor)
    }

    pub fn is_active(&self) -> bool {
        self.fecha_eliminacion.is_none()
    }
}
