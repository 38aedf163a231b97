use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use macetero_api::models::*;
use macetero_api::restful::*;

use crate::errors::ApiError;
use crate::repositories::FiltroConsejo;
use crate::services::ConsejoPlantaService;

use super::extract::ApiQuery;
use super::params;

#[derive(Clone)]
pub struct ConsejoPlantaState {
    pub consejo_planta_service: Arc<ConsejoPlantaService>,
}

pub fn consejo_planta_router(consejo_planta_state: ConsejoPlantaState) -> Router {
    Router::new()
        .route("/api/consejos_planta", get(get_consejos))
        .route("/api/consejos_planta/consejo", get(get_consejo))
        .with_state(consejo_planta_state)
}

#[utoipa::path(
    get,
    path = "/api/consejos_planta",
    tag = "consejo_planta",
    params(ConsejoFilterQuery),
    responses(
        (status = 200, description = "Advice matching the filter", body = Vec<ConsejoPlanta>),
        (status = 406, description = "Unknown zone or measurement type"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_consejos(
    State(state): State<ConsejoPlantaState>,
    ApiQuery(query): ApiQuery<ConsejoFilterQuery>,
) -> Result<Json<Vec<ConsejoPlanta>>, ApiError> {
    let filtro = FiltroConsejo {
        zona_consejo: query.zona_consejo.as_deref().map(params::zona_sensor).transpose()?,
        tipo_medida: query.tipo_medida.as_deref().map(params::tipo_medida).transpose()?,
        nombre_planta: query.nombre_planta,
    };

    Ok(Json(state.consejo_planta_service.list(&filtro).await?))
}

#[utoipa::path(
    get,
    path = "/api/consejos_planta/consejo",
    tag = "consejo_planta",
    params(ConsejoQuery),
    responses(
        (status = 200, description = "Advice found", body = ConsejoPlanta),
        (status = 400, description = "Missing plant name"),
        (status = 404, description = "Advice not found"),
        (status = 406, description = "Unknown zone or measurement type"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_consejo(
    State(state): State<ConsejoPlantaState>,
    ApiQuery(query): ApiQuery<ConsejoQuery>,
) -> Result<Json<ConsejoPlanta>, ApiError> {
    let zona = params::zona_sensor(&query.zona_consejo)?;
    let tipo = params::tipo_medida(&query.tipo_medida)?;

    Ok(Json(
        state
            .consejo_planta_service
            .get(&query.nombre_planta, zona, tipo)
            .await?,
    ))
}
