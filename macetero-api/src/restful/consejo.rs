use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "docs", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "docs", into_params(parameter_in = Query))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsejoQuery {
    pub nombre_planta: String,
    pub zona_consejo: String,
    pub tipo_medida: String,
}

#[cfg_attr(feature = "docs", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "docs", into_params(parameter_in = Query))]
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ConsejoFilterQuery {
    pub nombre_planta: Option<String>,
    pub zona_consejo: Option<String>,
    pub tipo_medida: Option<String>,
}
