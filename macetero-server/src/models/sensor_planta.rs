use macetero_api::models::{self as dto, ClaveSensor, TipoSensor, ZonaSensor};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::models::Table;

#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct SensorPlanta {
    pub id: i32,
    pub tipo_sensor: TipoSensor,
    pub zona_sensor: ZonaSensor,
    pub numero_sensor: i32,
    pub nombre_planta: String,
    pub fecha_asociacion: OffsetDateTime,
    pub fecha_eliminacion: Option<OffsetDateTime>,
}

impl From<SensorPlanta> for dto::SensorPlanta {
    fn from(row: SensorPlanta) -> Self {
        Self {
            tipo_sensor: row.tipo_sensor,
            zona_sensor: row.zona_sensor,
            numero_sensor: row.numero_sensor,
            nombre_planta: row.nombre_planta,
            fecha_asociacion: row.fecha_asociacion,
            fecha_eliminacion: row.fecha_eliminacion,
        }
    }
}

impl From<dto::SensorPlanta> for SensorPlanta {
    fn from(relacion: dto::SensorPlanta) -> Self {
        Self {
            id: 0,
            tipo_sensor: relacion.tipo_sensor,
            zona_sensor: relacion.zona_sensor,
            numero_sensor: relacion.numero_sensor,
            nombre_planta: relacion.nombre_planta,
            fecha_asociacion: relacion.fecha_asociacion,
            fecha_eliminacion: relacion.fecha_eliminacion,
        }
    }
}

impl SensorPlanta {
    pub fn new(clave: ClaveSensor, nombre_planta: &str, fecha_asociacion: OffsetDateTime) -> Self {
        Self {
            id: 0,
            tipo_sensor: clave.tipo_sensor,
            zona_sensor: clave.zona_sensor,
            numero_sensor: clave.numero_sensor,
            nombre_planta: nombre_planta.to_string(),
            fecha_asociacion,
            fecha_eliminacion: None,
        }
    }

    pub fn clave_sensor(&self) -> ClaveSensor {
        ClaveSensor::new(self.tipo_sensor, self.zona_sensor, self.numero_sensor)
    }
}

#[derive(Clone)]
pub struct SensorPlantaTable;

impl Table for SensorPlantaTable {
    fn name(&self) -> &'static str {
        "sensores_plantas"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS sensores_plantas (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                tipo_sensor TEXT NOT NULL,
                zona_sensor TEXT NOT NULL,
                numero_sensor INTEGER NOT NULL,
                nombre_planta TEXT NOT NULL,
                fecha_asociacion TIMESTAMP NOT NULL,
                fecha_eliminacion TIMESTAMP,
                UNIQUE (tipo_sensor, zona_sensor, numero_sensor, nombre_planta),
                FOREIGN KEY (tipo_sensor, zona_sensor, numero_sensor)
                    REFERENCES sensores (tipo_sensor, zona_sensor, numero_sensor) ON DELETE CASCADE,
                FOREIGN KEY (nombre_planta) REFERENCES plantas (nombre_planta) ON DELETE CASCADE
            );
            "#
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS sensores_plantas;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec!["sensores", "plantas"]
    }
}
