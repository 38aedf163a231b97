use std::sync::Arc;

use macetero_api::models::{self as dto, ClaveSensor, PuntoGrafica, RegistrosClasificados};
use time::OffsetDateTime;

use crate::configs::Storage;
use crate::errors::{ApiError, QueryError};
use crate::models::RegistroSensor;
use crate::repositories::{PlantaRepository, RegistroSensorRepository, SensorRepository};

pub struct RegistroSensorService {
    storage: Arc<Storage>,
    registro_sensor_repository: Arc<RegistroSensorRepository>,
    sensor_repository: Arc<SensorRepository>,
    planta_repository: Arc<PlantaRepository>,
}

impl RegistroSensorService {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self {
            registro_sensor_repository: Arc::new(RegistroSensorRepository::new(storage.clone())),
            sensor_repository: Arc::new(SensorRepository::new(storage.clone())),
            planta_repository: Arc::new(PlantaRepository::new(storage.clone())),
            storage,
        }
    }

    fn to_dto(registros: Vec<RegistroSensor>) -> Vec<dto::RegistroSensor> {
        registros.into_iter().map(Into::into).collect()
    }

    fn check_range(inicio: OffsetDateTime, fin: OffsetDateTime) -> Result<(), QueryError> {
        if inicio > fin {
            return Err(QueryError::RangoFechasInvalido {
                inicio: inicio.to_string(),
                fin: fin.to_string(),
            });
        }

        Ok(())
    }

    pub async fn create(&self, registro: dto::RegistroSensor) -> Result<dto::RegistroSensor, ApiError> {
        let mut item = RegistroSensor::from(registro);
        item.fecha = macetero_api::fecha::to_utc(item.fecha);

        let mut tx = self.storage.begin().await?;
        let id = self.registro_sensor_repository.create(&item, &mut tx).await?;
        tx.commit().await?;

        tracing::debug!(id, sensor = %item.clave(), planta = %item.nombre_planta, "reading stored");

        Ok(self.registro_sensor_repository.get(id).await?.into())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, ApiError> {
        Ok(self.registro_sensor_repository.exists(id).await?)
    }

    pub async fn get(&self, id: i32) -> Result<dto::RegistroSensor, ApiError> {
        Ok(self.registro_sensor_repository.get(id).await?.into())
    }

    pub async fn list_all(&self) -> Result<Vec<dto::RegistroSensor>, ApiError> {
        Ok(Self::to_dto(self.registro_sensor_repository.list_all().await?))
    }

    pub async fn list_all_from_sensor(
        &self,
        clave: ClaveSensor,
    ) -> Result<Vec<dto::RegistroSensor>, ApiError> {
        self.sensor_repository.get(clave).await?;

        Ok(Self::to_dto(
            self.registro_sensor_repository
                .list_all_from_sensor(clave)
                .await?,
        ))
    }

    pub async fn list_all_from_sensor_between_dates(
        &self,
        clave: ClaveSensor,
        inicio: OffsetDateTime,
        fin: OffsetDateTime,
    ) -> Result<Vec<dto::RegistroSensor>, ApiError> {
        Self::check_range(inicio, fin)?;
        self.sensor_repository.get(clave).await?;

        Ok(Self::to_dto(
            self.registro_sensor_repository
                .list_all_from_sensor_between_dates(clave, inicio, fin)
                .await?,
        ))
    }

    pub async fn list_all_from_plant(
        &self,
        nombre_planta: &str,
    ) -> Result<Vec<dto::RegistroSensor>, ApiError> {
        self.planta_repository.get(nombre_planta).await?;

        Ok(Self::to_dto(
            self.registro_sensor_repository
                .list_all_from_plant(nombre_planta)
                .await?,
        ))
    }

    pub async fn list_all_from_plant_between_dates(
        &self,
        nombre_planta: &str,
        inicio: OffsetDateTime,
        fin: OffsetDateTime,
    ) -> Result<Vec<dto::RegistroSensor>, ApiError> {
        Self::check_range(inicio, fin)?;
        self.planta_repository.get(nombre_planta).await?;

        Ok(Self::to_dto(
            self.registro_sensor_repository
                .list_all_from_plant_between_dates(nombre_planta, inicio, fin)
                .await?,
        ))
    }

    /// Drop readings taken before `fecha`.
    pub async fn delete_before(&self, fecha: OffsetDateTime) -> Result<u64, ApiError> {
        let mut tx = self.storage.begin().await?;
        let removed = self
            .registro_sensor_repository
            .delete_before(fecha, &mut tx)
            .await?;
        tx.commit().await?;

        tracing::info!(removed, before = %fecha, "old readings removed");

        Ok(removed)
    }

    /// Group readings by sensor type, then zone, keeping their order.
    pub fn process_list_for_graph(registros: &[dto::RegistroSensor]) -> RegistrosClasificados {
        let mut clasificados = RegistrosClasificados::new();

        for registro in registros {
            clasificados
                .entry(registro.tipo_sensor)
                .or_default()
                .entry(registro.zona_sensor)
                .or_default()
                .push(PuntoGrafica {
                    fecha: registro.fecha,
                    valor: registro.valor,
                });
        }

        clasificados
    }
}
