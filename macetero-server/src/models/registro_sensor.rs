use macetero_api::models::{self as dto, ClaveSensor, TipoSensor, ZonaSensor};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::Table;

#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct RegistroSensor {
    pub id: i32,
    pub tipo_sensor: TipoSensor,
    pub zona_sensor: ZonaSensor,
    pub numero_sensor: i32,
    pub valor: f64,
    pub escala: String,
    pub nombre_planta: String,
    /// The time of the reading
    pub fecha: OffsetDateTime,
}

impl From<RegistroSensor> for dto::RegistroSensor {
    fn from(row: RegistroSensor) -> Self {
        Self {
            id: row.id,
            tipo_sensor: row.tipo_sensor,
            zona_sensor: row.zona_sensor,
            numero_sensor: row.numero_sensor,
            valor: row.valor,
            escala: row.escala,
            nombre_planta: row.nombre_planta,
            fecha: row.fecha,
        }
    }
}

impl From<dto::RegistroSensor> for RegistroSensor {
    fn from(registro: dto::RegistroSensor) -> Self {
        Self {
            id: registro.id,
            tipo_sensor: registro.tipo_sensor,
            zona_sensor: registro.zona_sensor,
            numero_sensor: registro.numero_sensor,
            valor: registro.valor,
            escala: registro.escala,
            nombre_planta: registro.nombre_planta,
            fecha: registro.fecha,
        }
    }
}

impl RegistroSensor {
    pub fn clave(&self) -> ClaveSensor {
        ClaveSensor::new(self.tipo_sensor, self.zona_sensor, self.numero_sensor)
    }
}

#[derive(Clone)]
pub struct RegistroSensorTable;

impl Table for RegistroSensorTable {
    fn name(&self) -> &'static str {
        "registros_sensor"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS registros_sensor (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                tipo_sensor TEXT NOT NULL,
                zona_sensor TEXT NOT NULL,
                numero_sensor INTEGER NOT NULL,
                valor REAL NOT NULL,
                escala TEXT NOT NULL,
                nombre_planta TEXT NOT NULL,
                fecha TIMESTAMP NOT NULL,
                FOREIGN KEY (tipo_sensor, zona_sensor, numero_sensor)
                    REFERENCES sensores (tipo_sensor, zona_sensor, numero_sensor) ON DELETE CASCADE,
                FOREIGN KEY (nombre_planta) REFERENCES plantas (nombre_planta) ON DELETE CASCADE
            );
            CREATE INDEX IF NOT EXISTS registros_sensor_sensor_idx
                ON registros_sensor (tipo_sensor, zona_sensor, numero_sensor);
            CREATE INDEX IF NOT EXISTS registros_sensor_planta_idx
                ON registros_sensor (nombre_planta);
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS registros_sensor;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec!["sensores", "plantas"]
    }
}
