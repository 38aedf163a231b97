use axum::routing::get;
use axum::{Json, Router};
use macetero_api::models::*;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Macetero", description = "Plant monitoring readings, sensors and care advice"),
    paths(
        super::get_registros,
        super::get_registro_by_id,
        super::get_registros_from_sensor,
        super::get_registros_from_sensor_between_dates,
        super::get_registros_from_plant,
        super::get_registros_from_plant_between_dates,
        super::get_grafica_from_plant,
        super::get_grafica_from_plant_between_dates,
        super::get_sensores,
        super::get_sensor,
        super::get_plantas,
        super::get_planta,
        super::get_consejos,
        super::get_consejo,
    ),
    components(schemas(
        TipoSensor,
        ZonaSensor,
        TipoMedida,
        UnidadMedida,
        ModeloSensor,
        Sensor,
        Planta,
        RegistroSensor,
        ConsejoPlanta,
        PuntoGrafica,
        SeriesTemperatura,
        SeriesHumedad,
        GraficaRegistros,
    )),
    tags(
        (name = "registro_sensor", description = "Sensor readings"),
        (name = "sensor", description = "Sensors"),
        (name = "planta", description = "Plants"),
        (name = "consejo_planta", description = "Care advice per plant")
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new().route("/api/docs/openapi.json", get(get_openapi))
}

pub async fn get_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
