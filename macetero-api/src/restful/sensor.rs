use serde::{Deserialize, Serialize};

/// Identifies one sensor. Enum values arrive as raw names so the server can
/// answer unknown ones with its own message.
#[cfg_attr(feature = "docs", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "docs", into_params(parameter_in = Query))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorQuery {
    /// Sensor type name, e.g. `TEMPERATURA`
    pub tipo_sensor: String,
    /// Sensor zone name, e.g. `AMBIENTE`
    pub zona_sensor: String,
    pub numero_sensor: i32,
}

#[cfg_attr(feature = "docs", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "docs", into_params(parameter_in = Query))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorRangeQuery {
    pub tipo_sensor: String,
    pub zona_sensor: String,
    pub numero_sensor: i32,
    /// ISO-8601 start of the range, inclusive
    pub fecha_inicio: String,
    /// ISO-8601 end of the range, inclusive. Defaults to now.
    pub fecha_fin: Option<String>,
}

#[cfg_attr(feature = "docs", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "docs", into_params(parameter_in = Query))]
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SensorFilterQuery {
    pub tipo_sensor: Option<String>,
    pub zona_sensor: Option<String>,
    pub modelo_sensor: Option<String>,
    /// Only sensors without a deletion date
    #[serde(default)]
    pub activos: bool,
}
