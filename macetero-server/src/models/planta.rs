use macetero_api::models as dto;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::Table;

#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Planta {
    pub id: i32,
    pub nombre_planta: String,
    pub tipo_planta: String,
    pub descripcion: Option<String>,
    pub fecha_creacion: OffsetDateTime,
    pub fecha_eliminacion: Option<OffsetDateTime>,
}

impl From<Planta> for dto::Planta {
    fn from(row: Planta) -> Self {
        Self {
            nombre_planta: row.nombre_planta,
            tipo_planta: row.tipo_planta,
            descripcion: row.descripcion,
            fecha_creacion: row.fecha_creacion,
            fecha_eliminacion: row.fecha_eliminacion,
        }
    }
}

impl From<dto::Planta> for Planta {
    fn from(planta: dto::Planta) -> Self {
        Self {
            id: 0,
            nombre_planta: planta.nombre_planta,
            tipo_planta: planta.tipo_planta,
            descripcion: planta.descripcion,
            fecha_creacion: planta.fecha_creacion,
            fecha_eliminacion: planta.fecha_eliminacion,
        }
    }
}

#[derive(Clone)]
pub struct PlantaTable;

impl Table for PlantaTable {
    fn name(&self) -> &'static str {
        "plantas"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS plantas (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                nombre_planta TEXT NOT NULL UNIQUE,
                tipo_planta TEXT NOT NULL,
                descripcion TEXT,
                fecha_creacion TIMESTAMP NOT NULL,
                fecha_eliminacion TIMESTAMP
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS plantas;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec![]
    }
}
