use std::sync::Arc;

use macetero_api::models::{self as dto, ClaveSensor};
use time::OffsetDateTime;

use crate::configs::Storage;
use crate::errors::ApiError;
use crate::models::SensorPlanta;
use crate::repositories::SensorPlantaRepository;

pub struct SensorPlantaService {
    storage: Arc<Storage>,
    sensor_planta_repository: Arc<SensorPlantaRepository>,
}

impl SensorPlantaService {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self {
            sensor_planta_repository: Arc::new(SensorPlantaRepository::new(storage.clone())),
            storage,
        }
    }

    pub async fn create_relation(
        &self,
        clave: ClaveSensor,
        nombre_planta: &str,
    ) -> Result<dto::SensorPlanta, ApiError> {
        let item = SensorPlanta::new(clave, nombre_planta, OffsetDateTime::now_utc());

        let mut tx = self.storage.begin().await?;
        self.sensor_planta_repository.create(&item, &mut tx).await?;
        tx.commit().await?;

        tracing::debug!(sensor = %clave, planta = %nombre_planta, "sensor linked to plant");

        Ok(self
            .sensor_planta_repository
            .get(clave, nombre_planta)
            .await?
            .into())
    }

    pub async fn list_all_from_sensor(
        &self,
        clave: ClaveSensor,
    ) -> Result<Vec<dto::SensorPlanta>, ApiError> {
        let relaciones = self
            .sensor_planta_repository
            .list_all_from_sensor(clave)
            .await?;
        Ok(relaciones.into_iter().map(Into::into).collect())
    }

    pub async fn list_all_from_plant(
        &self,
        nombre_planta: &str,
    ) -> Result<Vec<dto::SensorPlanta>, ApiError> {
        let relaciones = self
            .sensor_planta_repository
            .list_all_from_plant(nombre_planta)
            .await?;
        Ok(relaciones.into_iter().map(Into::into).collect())
    }

    pub async fn unsubscribe_all_from_sensor(&self, clave: ClaveSensor) -> Result<u64, ApiError> {
        let mut tx = self.storage.begin().await?;
        let count = self
            .sensor_planta_repository
            .unsubscribe_all_from_sensor(clave, OffsetDateTime::now_utc(), &mut tx)
            .await?;
        tx.commit().await?;

        Ok(count)
    }

    pub async fn unsubscribe_all_from_plant(&self, nombre_planta: &str) -> Result<u64, ApiError> {
        let mut tx = self.storage.begin().await?;
        let count = self
            .sensor_planta_repository
            .unsubscribe_all_from_plant(nombre_planta, OffsetDateTime::now_utc(), &mut tx)
            .await?;
        tx.commit().await?;

        Ok(count)
    }
}
