use serde::{Deserialize, Serialize};

use super::{TipoMedida, UnidadMedida, ZonaSensor};

/// Advisory thresholds for one plant, zone and magnitude.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsejoPlanta {
    pub descripcion: String,
    pub nombre_planta: String,
    pub zona_consejo: ZonaSensor,
    pub tipo_medida: TipoMedida,
    pub unidad_medida: UnidadMedida,
    pub valor_minimo: f64,
    pub valor_maximo: f64,
    /// Minimum recommended hours per day within range
    pub horas_minimas: Option<f64>,
    /// Maximum recommended hours per day within range
    pub horas_maximas: Option<f64>,
}
