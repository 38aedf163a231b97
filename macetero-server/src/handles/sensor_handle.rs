use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use macetero_api::models::*;
use macetero_api::restful::*;

use crate::errors::ApiError;
use crate::repositories::FiltroSensor;
use crate::services::SensorService;

use super::extract::ApiQuery;
use super::params;

#[derive(Clone)]
pub struct SensorState {
    pub sensor_service: Arc<SensorService>,
}

pub fn sensor_router(sensor_state: SensorState) -> Router {
    Router::new()
        .route("/api/sensores", get(get_sensores))
        .route("/api/sensores/sensor", get(get_sensor))
        .with_state(sensor_state)
}

#[utoipa::path(
    get,
    path = "/api/sensores",
    tag = "sensor",
    params(SensorFilterQuery),
    responses(
        (status = 200, description = "Sensors matching the filter", body = Vec<Sensor>),
        (status = 406, description = "Unknown sensor type, zone or model"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_sensores(
    State(state): State<SensorState>,
    ApiQuery(query): ApiQuery<SensorFilterQuery>,
) -> Result<Json<Vec<Sensor>>, ApiError> {
    let filtro = FiltroSensor {
        tipo_sensor: query.tipo_sensor.as_deref().map(params::tipo_sensor).transpose()?,
        zona_sensor: query.zona_sensor.as_deref().map(params::zona_sensor).transpose()?,
        modelo_sensor: query.modelo_sensor.as_deref().map(params::modelo_sensor).transpose()?,
        solo_activos: query.activos,
    };

    Ok(Json(state.sensor_service.list(filtro).await?))
}

#[utoipa::path(
    get,
    path = "/api/sensores/sensor",
    tag = "sensor",
    params(SensorQuery),
    responses(
        (status = 200, description = "Sensor found", body = Sensor),
        (status = 404, description = "Sensor not found"),
        (status = 406, description = "Unknown sensor type or zone"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_sensor(
    State(state): State<SensorState>,
    ApiQuery(query): ApiQuery<SensorQuery>,
) -> Result<Json<Sensor>, ApiError> {
    let clave = params::clave_sensor(&query.tipo_sensor, &query.zona_sensor, query.numero_sensor)?;

    Ok(Json(state.sensor_service.get(clave).await?))
}
