use std::sync::Arc;

use macetero_api::models as dto;
use time::OffsetDateTime;

use crate::configs::Storage;
use crate::errors::ApiError;
use crate::models::{Planta, SensorPlanta};
use crate::repositories::{PlantaRepository, SensorPlantaRepository, SensorRepository};

pub struct PlantaService {
    storage: Arc<Storage>,
    planta_repository: Arc<PlantaRepository>,
    sensor_repository: Arc<SensorRepository>,
    sensor_planta_repository: Arc<SensorPlantaRepository>,
}

impl PlantaService {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self {
            planta_repository: Arc::new(PlantaRepository::new(storage.clone())),
            sensor_repository: Arc::new(SensorRepository::new(storage.clone())),
            sensor_planta_repository: Arc::new(SensorPlantaRepository::new(storage.clone())),
            storage,
        }
    }

    /// Store a new plant, optionally linking every active sensor to it.
    pub async fn create(
        &self,
        planta: dto::Planta,
        asociar_sensores_activos: bool,
    ) -> Result<dto::Planta, ApiError> {
        let sensores = match asociar_sensores_activos {
            true => self.sensor_repository.list_all_active().await?,
            false => Vec::new(),
        };

        let item = Planta::from(planta);
        let ahora = OffsetDateTime::now_utc();

        let mut tx = self.storage.begin().await?;
        self.planta_repository.create(&item, &mut tx).await?;
        for sensor in &sensores {
            self.sensor_planta_repository
                .create(&SensorPlanta::new(sensor.clave(), &item.nombre_planta, ahora), &mut tx)
                .await?;
        }
        tx.commit().await?;

        tracing::debug!(planta = %item.nombre_planta, sensores = sensores.len(), "plant created");

        Ok(self.planta_repository.get(&item.nombre_planta).await?.into())
    }

    pub async fn exists(&self, nombre_planta: &str) -> Result<bool, ApiError> {
        Ok(self.planta_repository.exists(nombre_planta).await?)
    }

    pub async fn get(&self, nombre_planta: &str) -> Result<dto::Planta, ApiError> {
        Ok(self.planta_repository.get(nombre_planta).await?.into())
    }

    pub async fn list_all(&self) -> Result<Vec<dto::Planta>, ApiError> {
        let plantas = self.planta_repository.list_all().await?;
        Ok(plantas.into_iter().map(Into::into).collect())
    }

    pub async fn list_all_active(&self) -> Result<Vec<dto::Planta>, ApiError> {
        let plantas = self.planta_repository.list_all_active().await?;
        Ok(plantas.into_iter().map(Into::into).collect())
    }

    pub async fn update(&self, planta: dto::Planta) -> Result<dto::Planta, ApiError> {
        let item = Planta::from(planta);

        let mut tx = self.storage.begin().await?;
        let updated = self.planta_repository.update(&item, &mut tx).await?;
        tx.commit().await?;

        tracing::debug!(planta = %updated.nombre_planta, "plant updated");

        Ok(updated.into())
    }

    /// Mark the plant as removed and end all of its sensor associations.
    pub async fn unsubscribe(&self, nombre_planta: &str) -> Result<dto::Planta, ApiError> {
        let mut item = self.planta_repository.get(nombre_planta).await?;
        let fecha = *item
            .fecha_eliminacion
            .get_or_insert_with(OffsetDateTime::now_utc);

        let mut tx = self.storage.begin().await?;
        let updated = self.planta_repository.update(&item, &mut tx).await?;
        let relaciones = self
            .sensor_planta_repository
            .unsubscribe_all_from_plant(nombre_planta, fecha, &mut tx)
            .await?;
        tx.commit().await?;

        tracing::debug!(planta = %nombre_planta, relaciones, "plant unsubscribed");

        Ok(updated.into())
    }
}

#[cfg(test)]
mod tests {
    use macetero_api::models::{ClaveSensor, TipoSensor, ZonaSensor};

    use crate::errors::PlantaError;
    use crate::tests::{create_test_sensor, create_test_sensor_planta, setup_test_db};

    use super::*;

    const CLAVE: ClaveSensor = ClaveSensor {
        tipo_sensor: TipoSensor::Humedad,
        zona_sensor: ZonaSensor::Maceta,
        numero_sensor: 1,
    };

    #[tokio::test]
    async fn test_create_links_active_sensors() {
        let storage = setup_test_db().await;
        create_test_sensor(storage.clone(), CLAVE).await;
        let service = PlantaService::new(storage.clone());

        let created = service
            .create(dto::Planta::new("Aloe", "Suculenta"), true)
            .await
            .unwrap();
        assert!(created.is_active());

        let relaciones = SensorPlantaRepository::new(storage)
            .list_all_active_from_plant("Aloe")
            .await
            .unwrap();
        assert_eq!(relaciones.len(), 1);
        assert_eq!(relaciones[0].clave_sensor(), CLAVE);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_type() {
        let storage = setup_test_db().await;
        let service = PlantaService::new(storage);

        let result = service.create(dto::Planta::new("Aloe", " "), false).await;
        assert!(matches!(
            result,
            Err(ApiError::PlantaError(PlantaError::DatoRequerido(_)))
        ));
        assert!(!service.exists("Aloe").await.unwrap());
    }

    #[tokio::test]
    async fn test_update_round_trip() {
        let storage = setup_test_db().await;
        let service = PlantaService::new(storage);
        let mut planta = service
            .create(dto::Planta::new("Aloe", "Suculenta"), false)
            .await
            .unwrap();

        planta.descripcion = Some("Poco riego".to_string());
        service.update(planta).await.unwrap();

        let found = service.get("Aloe").await.unwrap();
        assert_eq!(found.descripcion.as_deref(), Some("Poco riego"));
    }

    #[tokio::test]
    async fn test_unsubscribe_cascades_to_associations() {
        let storage = setup_test_db().await;
        create_test_sensor(storage.clone(), CLAVE).await;
        let service = PlantaService::new(storage.clone());
        service
            .create(dto::Planta::new("Aloe", "Suculenta"), false)
            .await
            .unwrap();
        service
            .create(dto::Planta::new("Ficus", "Ficus"), false)
            .await
            .unwrap();
        create_test_sensor_planta(storage.clone(), CLAVE, "Aloe").await;
        create_test_sensor_planta(storage.clone(), CLAVE, "Ficus").await;

        let baja = service.unsubscribe("Aloe").await.unwrap();
        assert!(!baja.is_active());

        let activas = service.list_all_active().await.unwrap();
        assert_eq!(activas.len(), 1);
        assert_eq!(activas[0].nombre_planta, "Ficus");

        let relaciones = SensorPlantaRepository::new(storage)
            .list_all_active_from_sensor(CLAVE)
            .await
            .unwrap();
        assert_eq!(relaciones.len(), 1);
        assert_eq!(relaciones[0].nombre_planta, "Ficus");

        let again = service.unsubscribe("Aloe").await.unwrap();
        assert_eq!(again.fecha_eliminacion, baja.fecha_eliminacion);
    }
}
