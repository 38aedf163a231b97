use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use macetero_api::models::*;
use macetero_api::restful::*;

use crate::errors::ApiError;
use crate::services::PlantaService;

use super::extract::ApiQuery;

#[derive(Clone)]
pub struct PlantaState {
    pub planta_service: Arc<PlantaService>,
}

pub fn planta_router(planta_state: PlantaState) -> Router {
    Router::new()
        .route("/api/plantas", get(get_plantas))
        .route("/api/plantas/planta", get(get_planta))
        .with_state(planta_state)
}

#[utoipa::path(
    get,
    path = "/api/plantas",
    tag = "planta",
    params(PlantaFilterQuery),
    responses(
        (status = 200, description = "Registered plants", body = Vec<Planta>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_plantas(
    State(state): State<PlantaState>,
    ApiQuery(query): ApiQuery<PlantaFilterQuery>,
) -> Result<Json<Vec<Planta>>, ApiError> {
    let plantas = match query.activas {
        true => state.planta_service.list_all_active().await?,
        false => state.planta_service.list_all().await?,
    };

    Ok(Json(plantas))
}

#[utoipa::path(
    get,
    path = "/api/plantas/planta",
    tag = "planta",
    params(PlantaQuery),
    responses(
        (status = 200, description = "Plant found", body = Planta),
        (status = 404, description = "Plant not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_planta(
    State(state): State<PlantaState>,
    ApiQuery(query): ApiQuery<PlantaQuery>,
) -> Result<Json<Planta>, ApiError> {
    Ok(Json(state.planta_service.get(&query.nombre_planta).await?))
}
