use core::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{ModeloSensor, TipoSensor, UnidadMedida, ZonaSensor};

/// Number of wiring pins a sensor can be read through.
pub const PATILLAS_LECTURA: usize = 4;

/// Natural key of a sensor.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClaveSensor {
    pub tipo_sensor: TipoSensor,
    pub zona_sensor: ZonaSensor,
    pub numero_sensor: i32,
}

impl ClaveSensor {
    pub fn new(tipo_sensor: TipoSensor, zona_sensor: ZonaSensor, numero_sensor: i32) -> Self {
        Self {
            tipo_sensor,
            zona_sensor,
            numero_sensor,
        }
    }
}

impl fmt::Display for ClaveSensor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} de tipo {} de la zona {}",
            self.numero_sensor, self.tipo_sensor, self.zona_sensor
        )
    }
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    pub tipo_sensor: TipoSensor,
    pub zona_sensor: ZonaSensor,
    pub numero_sensor: i32,
    pub modelo_sensor: ModeloSensor,
    pub nombre_sensor: String,
    /// Bus address the sensor is read from, if any
    pub direccion_lectura: Option<String>,
    pub patilla_0_lectura: Option<i32>,
    pub patilla_1_lectura: Option<i32>,
    pub patilla_2_lectura: Option<i32>,
    pub patilla_3_lectura: Option<i32>,
    pub unidad_medida_0: UnidadMedida,
    pub unidad_medida_1: UnidadMedida,
    pub unidad_medida_2: UnidadMedida,
    pub unidad_medida_3: UnidadMedida,
    #[serde(with = "time::serde::rfc3339")]
    pub fecha_creacion: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub fecha_eliminacion: Option<OffsetDateTime>,
}

impl Sensor {
    pub fn new(
        clave: ClaveSensor,
        modelo_sensor: ModeloSensor,
        nombre_sensor: &str,
    ) -> Self {
        Self {
            tipo_sensor: clave.tipo_sensor,
            zona_sensor: clave.zona_sensor,
            numero_sensor: clave.numero_sensor,
            modelo_sensor,
            nombre_sensor: nombre_sensor.to_string(),
            direccion_lectura: None,
            patilla_0_lectura: None,
            patilla_1_lectura: None,
            patilla_2_lectura: None,
            patilla_3_lectura: None,
            unidad_medida_0: UnidadMedida::default(),
            unidad_medida_1: UnidadMedida::default(),
            unidad_medida_2: UnidadMedida::default(),
            unidad_medida_3: UnidadMedida::default(),
            fecha_creacion: OffsetDateTime::now_utc(),
            fecha_eliminacion: None,
        }
    }

    pub fn clave(&self) -> ClaveSensor {
        ClaveSensor::new(self.tipo_sensor, self.zona_sensor, self.numero_sensor)
    }

    pub fn is_active(&self) -> bool {
        self.fecha_eliminacion.is_none()
    }

    pub fn patilla_lectura(&self, index: usize) -> Option<i32> {
        match index {
            0 => self.patilla_0_lectura,
            1 => self.patilla_1_lectura,
            2 => self.patilla_2_lectura,
            3 => self.patilla_3_lectura,
            _ => None,
        }
    }

    pub fn unidad_medida(&self, index: usize) -> Option<UnidadMedida> {
        match index {
            0 => Some(self.unidad_medida_0),
            1 => Some(self.unidad_medida_1),
            2 => Some(self.unidad_medida_2),
            3 => Some(self.unidad_medida_3),
            _ => None,
        }
    }

    /// Wire `patilla` to input `index`, reading values in `unidad`.
    pub fn with_patilla(mut self, index: usize, patilla: i32, unidad: UnidadMedida) -> Self {
        match index {
            0 => (self.patilla_0_lectura, self.unidad_medida_0) = (Some(patilla), unidad),
            1 => (self.patilla_1_lectura, self.unidad_medida_1) = (Some(patilla), unidad),
            2 => (self.patilla_2_lectura, self.unidad_medida_2) = (Some(patilla), unidad),
            3 => (self.patilla_3_lectura, self.unidad_medida_3) = (Some(patilla), unidad),
            _ => {}
        }
        self
    }
}
