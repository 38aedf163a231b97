use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::configs::{SchemaManager, Settings, Storage};
use crate::handles::*;
use crate::services::{ConsejoPlantaService, PlantaService, RegistroSensorService, SensorService};

pub async fn create_app(settings: &Arc<Settings>) -> Result<Router, sqlx::Error> {
    let storage = Arc::new(Storage::new(settings.database.clone(), SchemaManager::default()).await?);

    Ok(create_router(storage))
}

pub fn create_router(storage: Arc<Storage>) -> Router {
    let registro_sensor_state = RegistroSensorState {
        registro_sensor_service: Arc::new(RegistroSensorService::new(storage.clone())),
    };

    let sensor_state = SensorState {
        sensor_service: Arc::new(SensorService::new(storage.clone())),
    };

    let planta_state = PlantaState {
        planta_service: Arc::new(PlantaService::new(storage.clone())),
    };

    let consejo_planta_state = ConsejoPlantaState {
        consejo_planta_service: Arc::new(ConsejoPlantaService::new(storage.clone())),
    };

    Router::new()
        .merge(registro_sensor_router(registro_sensor_state))
        .merge(sensor_router(sensor_state))
        .merge(planta_router(planta_state))
        .merge(consejo_planta_router(consejo_planta_state))
        .merge(docs_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
