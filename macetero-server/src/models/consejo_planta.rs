use macetero_api::models::{self as dto, TipoMedida, UnidadMedida, ZonaSensor};
use serde::{Deserialize, Serialize};

use super::Table;

#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct ConsejoPlanta {
    pub id: i32,
    pub descripcion: String,
    pub nombre_planta: String,
    pub zona_consejo: ZonaSensor,
    pub tipo_medida: TipoMedida,
    pub unidad_medida: UnidadMedida,
    pub valor_minimo: f64,
    pub valor_maximo: f64,
    pub horas_minimas: Option<f64>,
    pub horas_maximas: Option<f64>,
}

impl From<ConsejoPlanta> for dto::ConsejoPlanta {
    fn from(row: ConsejoPlanta) -> Self {
        Self {
            descripcion: row.descripcion,
            nombre_planta: row.nombre_planta,
            zona_consejo: row.zona_consejo,
            tipo_medida: row.tipo_medida,
            unidad_medida: row.unidad_medida,
            valor_minimo: row.valor_minimo,
            valor_maximo: row.valor_maximo,
            horas_minimas: row.horas_minimas,
            horas_maximas: row.horas_maximas,
        }
    }
}

impl From<dto::ConsejoPlanta> for ConsejoPlanta {
    fn from(consejo: dto::ConsejoPlanta) -> Self {
        Self {
            id: 0,
            descripcion: consejo.descripcion,
            nombre_planta: consejo.nombre_planta,
            zona_consejo: consejo.zona_consejo,
            tipo_medida: consejo.tipo_medida,
            unidad_medida: consejo.unidad_medida,
            valor_minimo: consejo.valor_minimo,
            valor_maximo: consejo.valor_maximo,
            horas_minimas: consejo.horas_minimas,
            horas_maximas: consejo.horas_maximas,
        }
    }
}

#[derive(Clone)]
pub struct ConsejoPlantaTable;

impl Table for ConsejoPlantaTable {
    fn name(&self) -> &'static str {
        "consejos_planta"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS consejos_planta (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                descripcion TEXT NOT NULL,
                nombre_planta TEXT NOT NULL,
                zona_consejo TEXT NOT NULL,
                tipo_medida TEXT NOT NULL,
                unidad_medida TEXT NOT NULL,
                valor_minimo REAL NOT NULL,
                valor_maximo REAL NOT NULL,
                horas_minimas REAL,
                horas_maximas REAL,
                UNIQUE (nombre_planta, zona_consejo, tipo_medida)
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS consejos_planta;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec![]
    }
}
