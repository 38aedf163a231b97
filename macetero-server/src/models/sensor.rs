use macetero_api::models::{self as dto, ClaveSensor, ModeloSensor, TipoSensor, UnidadMedida, ZonaSensor};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::models::Table;

#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Sensor {
    pub id: i32,
    pub tipo_sensor: TipoSensor,
    pub zona_sensor: ZonaSensor,
    pub numero_sensor: i32,
    pub modelo_sensor: ModeloSensor,
    pub nombre_sensor: String,
    pub direccion_lectura: Option<String>,
    pub patilla_0_lectura: Option<i32>,
    pub patilla_1_lectura: Option<i32>,
    pub patilla_2_lectura: Option<i32>,
    pub patilla_3_lectura: Option<i32>,
    pub unidad_medida_0: UnidadMedida,
    pub unidad_medida_1: UnidadMedida,
    pub unidad_medida_2: UnidadMedida,
    pub unidad_medida_3: UnidadMedida,
    pub fecha_creacion: OffsetDateTime,
    pub fecha_eliminacion: Option<OffsetDateTime>,
}

impl From<Sensor> for dto::Sensor {
    fn from(row: Sensor) -> Self {
        Self {
            tipo_sensor: row.tipo_sensor,
            zona_sensor: row.zona_sensor,
            numero_sensor: row.numero_sensor,
            modelo_sensor: row.modelo_sensor,
            nombre_sensor: row.nombre_sensor,
            direccion_lectura: row.direccion_lectura,
            patilla_0_lectura: row.patilla_0_lectura,
            patilla_1_lectura: row.patilla_1_lectura,
            patilla_2_lectura: row.patilla_2_lectura,
            patilla_3_lectura: row.patilla_3_lectura,
            unidad_medida_0: row.unidad_medida_0,
            unidad_medida_1: row.unidad_medida_1,
            unidad_medida_2: row.unidad_medida_2,
            unidad_medida_3: row.unidad_medida_3,
            fecha_creacion: row.fecha_creacion,
            fecha_eliminacion: row.fecha_eliminacion,
        }
    }
}

impl From<dto::Sensor> for Sensor {
    fn from(sensor: dto::Sensor) -> Self {
        Self {
            id: 0,
            tipo_sensor: sensor.tipo_sensor,
            zona_sensor: sensor.zona_sensor,
            numero_sensor: sensor.numero_sensor,
            modelo_sensor: sensor.modelo_sensor,
            nombre_sensor: sensor.nombre_sensor,
            direccion_lectura: sensor.direccion_lectura,
            patilla_0_lectura: sensor.patilla_0_lectura,
            patilla_1_lectura: sensor.patilla_1_lectura,
            patilla_2_lectura: sensor.patilla_2_lectura,
            patilla_3_lectura: sensor.patilla_3_lectura,
            unidad_medida_0: sensor.unidad_medida_0,
            unidad_medida_1: sensor.unidad_medida_1,
            unidad_medida_2: sensor.unidad_medida_2,
            unidad_medida_3: sensor.unidad_medida_3,
            fecha_creacion: sensor.fecha_creacion,
            fecha_eliminacion: sensor.fecha_eliminacion,
        }
    }
}

impl Sensor {
    pub fn clave(&self) -> ClaveSensor {
        ClaveSensor::new(self.tipo_sensor, self.zona_sensor, self.numero_sensor)
    }
}

#[derive(Clone)]
pub struct SensorTable;

impl Table for SensorTable {
    fn name(&self) -> &'static str {
        "sensores"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS sensores (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                tipo_sensor TEXT NOT NULL,
                zona_sensor TEXT NOT NULL,
                numero_sensor INTEGER NOT NULL,
                modelo_sensor TEXT NOT NULL,
                nombre_sensor TEXT NOT NULL,
                direccion_lectura TEXT,
                patilla_0_lectura INTEGER,
                patilla_1_lectura INTEGER,
                patilla_2_lectura INTEGER,
                patilla_3_lectura INTEGER,
                unidad_medida_0 TEXT NOT NULL DEFAULT 'SIN_UNIDAD',
                unidad_medida_1 TEXT NOT NULL DEFAULT 'SIN_UNIDAD',
                unidad_medida_2 TEXT NOT NULL DEFAULT 'SIN_UNIDAD',
                unidad_medida_3 TEXT NOT NULL DEFAULT 'SIN_UNIDAD',
                fecha_creacion TIMESTAMP NOT NULL,
                fecha_eliminacion TIMESTAMP,
                UNIQUE (tipo_sensor, zona_sensor, numero_sensor)
            );
            "#
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS sensores;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec![]
    }
}
