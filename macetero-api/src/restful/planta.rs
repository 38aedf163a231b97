use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "docs", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "docs", into_params(parameter_in = Query))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantaQuery {
    pub nombre_planta: String,
}

#[cfg_attr(feature = "docs", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "docs", into_params(parameter_in = Query))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantaRangeQuery {
    pub nombre_planta: String,
    /// ISO-8601 start of the range, inclusive
    pub fecha_inicio: String,
    /// ISO-8601 end of the range, inclusive. Defaults to now.
    pub fecha_fin: Option<String>,
}

#[cfg_attr(feature = "docs", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "docs", into_params(parameter_in = Query))]
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PlantaFilterQuery {
    /// Only plants without a deletion date
    #[serde(default)]
    pub activas: bool,
}
