use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use macetero_api::models::*;
use macetero_api::restful::*;

use crate::errors::ApiError;
use crate::services::RegistroSensorService;

use super::extract::{ApiPath, ApiQuery};
use super::params;

#[derive(Clone)]
pub struct RegistroSensorState {
    pub registro_sensor_service: Arc<RegistroSensorService>,
}

pub fn registro_sensor_router(registro_sensor_state: RegistroSensorState) -> Router {
    Router::new()
        .route("/api/registros_sensor", get(get_registros))
        .route("/api/registros_sensor/:id", get(get_registro_by_id))
        .route("/api/sensores/registros", get(get_registros_from_sensor))
        .route(
            "/api/sensores/registros/fechas",
            get(get_registros_from_sensor_between_dates),
        )
        .route("/api/plantas/registros", get(get_registros_from_plant))
        .route(
            "/api/plantas/registros/fechas",
            get(get_registros_from_plant_between_dates),
        )
        .route("/api/plantas/registros/grafica", get(get_grafica_from_plant))
        .route(
            "/api/plantas/registros/fechas/grafica",
            get(get_grafica_from_plant_between_dates),
        )
        .with_state(registro_sensor_state)
}

#[utoipa::path(
    get,
    path = "/api/registros_sensor",
    tag = "registro_sensor",
    responses(
        (status = 200, description = "All stored readings", body = Vec<RegistroSensor>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_registros(
    State(state): State<RegistroSensorState>,
) -> Result<Json<Vec<RegistroSensor>>, ApiError> {
    Ok(Json(state.registro_sensor_service.list_all().await?))
}

#[utoipa::path(
    get,
    path = "/api/registros_sensor/{id}",
    tag = "registro_sensor",
    params(
        ("id" = i32, Path, description = "Reading identifier")
    ),
    responses(
        (status = 200, description = "Reading found", body = RegistroSensor),
        (status = 404, description = "Reading not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_registro_by_id(
    State(state): State<RegistroSensorState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<RegistroSensor>, ApiError> {
    Ok(Json(state.registro_sensor_service.get(id).await?))
}

#[utoipa::path(
    get,
    path = "/api/sensores/registros",
    tag = "registro_sensor",
    params(SensorQuery),
    responses(
        (status = 200, description = "Readings of the sensor", body = Vec<RegistroSensor>),
        (status = 404, description = "Sensor not found"),
        (status = 406, description = "Unknown sensor type or zone"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_registros_from_sensor(
    State(state): State<RegistroSensorState>,
    ApiQuery(query): ApiQuery<SensorQuery>,
) -> Result<Json<Vec<RegistroSensor>>, ApiError> {
    let clave = params::clave_sensor(&query.tipo_sensor, &query.zona_sensor, query.numero_sensor)?;

    Ok(Json(
        state
            .registro_sensor_service
            .list_all_from_sensor(clave)
            .await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/sensores/registros/fechas",
    tag = "registro_sensor",
    params(SensorRangeQuery),
    responses(
        (status = 200, description = "Readings of the sensor within the range", body = Vec<RegistroSensor>),
        (status = 404, description = "Sensor not found"),
        (status = 406, description = "Unknown sensor type or zone, or invalid date range"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_registros_from_sensor_between_dates(
    State(state): State<RegistroSensorState>,
    ApiQuery(query): ApiQuery<SensorRangeQuery>,
) -> Result<Json<Vec<RegistroSensor>>, ApiError> {
    let clave = params::clave_sensor(&query.tipo_sensor, &query.zona_sensor, query.numero_sensor)?;
    let (inicio, fin) = params::rango_fechas(&query.fecha_inicio, query.fecha_fin.as_deref())?;

    Ok(Json(
        state
            .registro_sensor_service
            .list_all_from_sensor_between_dates(clave, inicio, fin)
            .await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/plantas/registros",
    tag = "registro_sensor",
    params(PlantaQuery),
    responses(
        (status = 200, description = "Readings of the plant", body = Vec<RegistroSensor>),
        (status = 404, description = "Plant not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_registros_from_plant(
    State(state): State<RegistroSensorState>,
    ApiQuery(query): ApiQuery<PlantaQuery>,
) -> Result<Json<Vec<RegistroSensor>>, ApiError> {
    Ok(Json(
        state
            .registro_sensor_service
            .list_all_from_plant(&query.nombre_planta)
            .await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/plantas/registros/fechas",
    tag = "registro_sensor",
    params(PlantaRangeQuery),
    responses(
        (status = 200, description = "Readings of the plant within the range", body = Vec<RegistroSensor>),
        (status = 404, description = "Plant not found"),
        (status = 406, description = "Invalid date range"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_registros_from_plant_between_dates(
    State(state): State<RegistroSensorState>,
    ApiQuery(query): ApiQuery<PlantaRangeQuery>,
) -> Result<Json<Vec<RegistroSensor>>, ApiError> {
    let (inicio, fin) = params::rango_fechas(&query.fecha_inicio, query.fecha_fin.as_deref())?;

    Ok(Json(
        state
            .registro_sensor_service
            .list_all_from_plant_between_dates(&query.nombre_planta, inicio, fin)
            .await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/plantas/registros/grafica",
    tag = "registro_sensor",
    params(PlantaQuery),
    responses(
        (status = 200, description = "Readings of the plant grouped for plotting", body = GraficaRegistros),
        (status = 404, description = "Plant not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_grafica_from_plant(
    State(state): State<RegistroSensorState>,
    ApiQuery(query): ApiQuery<PlantaQuery>,
) -> Result<Json<GraficaRegistros>, ApiError> {
    let registros = state
        .registro_sensor_service
        .list_all_from_plant(&query.nombre_planta)
        .await?;

    Ok(Json(
        RegistroSensorService::process_list_for_graph(&registros).into(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/plantas/registros/fechas/grafica",
    tag = "registro_sensor",
    params(PlantaRangeQuery),
    responses(
        (status = 200, description = "Readings of the plant within the range grouped for plotting", body = GraficaRegistros),
        (status = 404, description = "Plant not found"),
        (status = 406, description = "Invalid date range"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_grafica_from_plant_between_dates(
    State(state): State<RegistroSensorState>,
    ApiQuery(query): ApiQuery<PlantaRangeQuery>,
) -> Result<Json<GraficaRegistros>, ApiError> {
    let (inicio, fin) = params::rango_fechas(&query.fecha_inicio, query.fecha_fin.as_deref())?;

    let registros = state
        .registro_sensor_service
        .list_all_from_plant_between_dates(&query.nombre_planta, inicio, fin)
        .await?;

    Ok(Json(
        RegistroSensorService::process_list_for_graph(&registros).into(),
    ))
}
