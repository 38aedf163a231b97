use std::sync::Arc;

use macetero_api::models::{self as dto, ClaveSensor, ModeloSensor, TipoSensor, ZonaSensor};
use time::OffsetDateTime;

use crate::configs::Storage;
use crate::errors::ApiError;
use crate::models::{Sensor, SensorPlanta};
use crate::repositories::{FiltroSensor, PlantaRepository, SensorPlantaRepository, SensorRepository};

pub struct SensorService {
    storage: Arc<Storage>,
    sensor_repository: Arc<SensorRepository>,
    planta_repository: Arc<PlantaRepository>,
    sensor_planta_repository: Arc<SensorPlantaRepository>,
}

impl SensorService {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self {
            sensor_repository: Arc::new(SensorRepository::new(storage.clone())),
            planta_repository: Arc::new(PlantaRepository::new(storage.clone())),
            sensor_planta_repository: Arc::new(SensorPlantaRepository::new(storage.clone())),
            storage,
        }
    }

    fn to_dto(sensores: Vec<Sensor>) -> Vec<dto::Sensor> {
        sensores.into_iter().map(Into::into).collect()
    }

    /// Store a new sensor, optionally linking it to every active plant.
    pub async fn create(
        &self,
        sensor: dto::Sensor,
        asociar_plantas_activas: bool,
    ) -> Result<dto::Sensor, ApiError> {
        let plantas = match asociar_plantas_activas {
            true => self.planta_repository.list_all_active().await?,
            false => Vec::new(),
        };

        let item = Sensor::from(sensor);
        let clave = item.clave();
        let ahora = OffsetDateTime::now_utc();

        let mut tx = self.storage.begin().await?;
        self.sensor_repository.create(&item, &mut tx).await?;
        for planta in &plantas {
            self.sensor_planta_repository
                .create(&SensorPlanta::new(clave, &planta.nombre_planta, ahora), &mut tx)
                .await?;
        }
        tx.commit().await?;

        tracing::debug!(sensor = %clave, plantas = plantas.len(), "sensor created");

        Ok(self.sensor_repository.get(clave).await?.into())
    }

    pub async fn exists(&self, clave: ClaveSensor) -> Result<bool, ApiError> {
        Ok(self.sensor_repository.exists(clave).await?)
    }

    pub async fn get(&self, clave: ClaveSensor) -> Result<dto::Sensor, ApiError> {
        Ok(self.sensor_repository.get(clave).await?.into())
    }

    pub async fn list(&self, filtro: FiltroSensor) -> Result<Vec<dto::Sensor>, ApiError> {
        Ok(Self::to_dto(self.sensor_repository.list(filtro).await?))
    }

    pub async fn list_all(&self) -> Result<Vec<dto::Sensor>, ApiError> {
        Ok(Self::to_dto(self.sensor_repository.list_all().await?))
    }

    pub async fn list_all_active(&self) -> Result<Vec<dto::Sensor>, ApiError> {
        Ok(Self::to_dto(self.sensor_repository.list_all_active().await?))
    }

    pub async fn list_all_from_type(&self, tipo: TipoSensor) -> Result<Vec<dto::Sensor>, ApiError> {
        Ok(Self::to_dto(self.sensor_repository.list_all_from_type(tipo).await?))
    }

    pub async fn list_all_active_from_type(
        &self,
        tipo: TipoSensor,
    ) -> Result<Vec<dto::Sensor>, ApiError> {
        Ok(Self::to_dto(
            self.sensor_repository.list_all_active_from_type(tipo).await?,
        ))
    }

    pub async fn list_all_from_zone(&self, zona: ZonaSensor) -> Result<Vec<dto::Sensor>, ApiError> {
        Ok(Self::to_dto(self.sensor_repository.list_all_from_zone(zona).await?))
    }

    pub async fn list_all_active_from_zone(
        &self,
        zona: ZonaSensor,
    ) -> Result<Vec<dto::Sensor>, ApiError> {
        Ok(Self::to_dto(
            self.sensor_repository.list_all_active_from_zone(zona).await?,
        ))
    }

    pub async fn list_all_from_type_and_zone(
        &self,
        tipo: TipoSensor,
        zona: ZonaSensor,
    ) -> Result<Vec<dto::Sensor>, ApiError> {
        Ok(Self::to_dto(
            self.sensor_repository
                .list_all_from_type_and_zone(tipo, zona)
                .await?,
        ))
    }

    pub async fn list_all_active_from_type_and_zone(
        &self,
        tipo: TipoSensor,
        zona: ZonaSensor,
    ) -> Result<Vec<dto::Sensor>, ApiError> {
        Ok(Self::to_dto(
            self.sensor_repository
                .list_all_active_from_type_and_zone(tipo, zona)
                .await?,
        ))
    }

    pub async fn list_all_from_model(
        &self,
        modelo: ModeloSensor,
    ) -> Result<Vec<dto::Sensor>, ApiError> {
        Ok(Self::to_dto(self.sensor_repository.list_all_from_model(modelo).await?))
    }

    pub async fn list_all_active_from_model(
        &self,
        modelo: ModeloSensor,
    ) -> Result<Vec<dto::Sensor>, ApiError> {
        Ok(Self::to_dto(
            self.sensor_repository.list_all_active_from_model(modelo).await?,
        ))
    }

    pub async fn update(&self, sensor: dto::Sensor) -> Result<dto::Sensor, ApiError> {
        let item = Sensor::from(sensor);

        let mut tx = self.storage.begin().await?;
        let updated = self.sensor_repository.update(&item, &mut tx).await?;
        tx.commit().await?;

        tracing::debug!(sensor = %updated.clave(), "sensor updated");

        Ok(updated.into())
    }

    /// Mark the sensor as removed and end all of its plant associations.
    ///
    /// A sensor already removed keeps its original removal date.
    pub async fn unsubscribe(&self, clave: ClaveSensor) -> Result<dto::Sensor, ApiError> {
        let mut item = self.sensor_repository.get(clave).await?;
        let fecha = *item
            .fecha_eliminacion
            .get_or_insert_with(OffsetDateTime::now_utc);

        let mut tx = self.storage.begin().await?;
        let updated = self.sensor_repository.update(&item, &mut tx).await?;
        let relaciones = self
            .sensor_planta_repository
            .unsubscribe_all_from_sensor(clave, fecha, &mut tx)
            .await?;
        tx.commit().await?;

        tracing::debug!(sensor = %clave, relaciones, "sensor unsubscribed");

        Ok(updated.into())
    }
}
