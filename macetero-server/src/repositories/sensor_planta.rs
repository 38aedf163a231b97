use std::sync::Arc;

use macetero_api::models::ClaveSensor;
use sqlx::{Sqlite, Transaction};
use time::OffsetDateTime;

use crate::configs::Storage;
use crate::errors::SensorPlantaError;
use crate::models::SensorPlanta;

use super::{is_foreign_key_violation, is_unique_violation};

pub struct SensorPlantaRepository {
    storage: Arc<Storage>,
}

impl SensorPlantaRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }
}

impl SensorPlantaRepository {
    pub async fn create(
        &self,
        item: &SensorPlanta,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<i32, SensorPlantaError> {
        let id = sqlx::query(
            r#"
            INSERT INTO sensores_plantas (tipo_sensor, zona_sensor, numero_sensor, nombre_planta, fecha_asociacion, fecha_eliminacion)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(item.tipo_sensor)
        .bind(item.zona_sensor)
        .bind(item.numero_sensor)
        .bind(&item.nombre_planta)
        .bind(item.fecha_asociacion)
        .bind(item.fecha_eliminacion)
        .execute(&mut **transaction)
        .await
        .map_err(|e| {
            let clave = item.clave_sensor();
            let nombre_planta = item.nombre_planta.clone();
            if is_unique_violation(&e) {
                SensorPlantaError::SensorPlantaExiste { clave, nombre_planta }
            } else if is_foreign_key_violation(&e) {
                SensorPlantaError::ReferenciaNoExiste { clave, nombre_planta }
            } else {
                SensorPlantaError::Database(e)
            }
        })?
        .last_insert_rowid();

        Ok(id as i32)
    }

    pub async fn find(
        &self,
        clave: ClaveSensor,
        nombre_planta: &str,
    ) -> Result<Option<SensorPlanta>, SensorPlantaError> {
        let relacion: Option<SensorPlanta> = sqlx::query_as(
            r#"
            SELECT * FROM sensores_plantas
            WHERE tipo_sensor = $1 AND zona_sensor = $2 AND numero_sensor = $3 AND nombre_planta = $4
            "#,
        )
        .bind(clave.tipo_sensor)
        .bind(clave.zona_sensor)
        .bind(clave.numero_sensor)
        .bind(nombre_planta)
        .fetch_optional(self.storage.get_pool())
        .await?;

        Ok(relacion)
    }

    pub async fn get(
        &self,
        clave: ClaveSensor,
        nombre_planta: &str,
    ) -> Result<SensorPlanta, SensorPlantaError> {
        self.find(clave, nombre_planta)
            .await?
            .ok_or_else(|| SensorPlantaError::SensorPlantaNoExiste {
                clave,
                nombre_planta: nombre_planta.to_string(),
            })
    }

    async fn list_from_sensor(
        &self,
        clave: ClaveSensor,
        solo_activas: bool,
    ) -> Result<Vec<SensorPlanta>, SensorPlantaError> {
        let relaciones: Vec<SensorPlanta> = sqlx::query_as(
            r#"
            SELECT * FROM sensores_plantas
            WHERE tipo_sensor = $1 AND zona_sensor = $2 AND numero_sensor = $3
              AND (NOT $4 OR fecha_eliminacion IS NULL)
            ORDER BY nombre_planta
            "#,
        )
        .bind(clave.tipo_sensor)
        .bind(clave.zona_sensor)
        .bind(clave.numero_sensor)
        .bind(solo_activas)
        .fetch_all(self.storage.get_pool())
        .await?;

        Ok(relaciones)
    }

    async fn list_from_plant(
        &self,
        nombre_planta: &str,
        solo_activas: bool,
    ) -> Result<Vec<SensorPlanta>, SensorPlantaError> {
        let relaciones: Vec<SensorPlanta> = sqlx::query_as(
            r#"
            SELECT * FROM sensores_plantas
            WHERE nombre_planta = $1
              AND (NOT $2 OR fecha_eliminacion IS NULL)
            ORDER BY tipo_sensor, zona_sensor, numero_sensor
            "#,
        )
        .bind(nombre_planta)
        .bind(solo_activas)
        .fetch_all(self.storage.get_pool())
        .await?;

        Ok(relaciones)
    }

    pub async fn list_all_from_sensor(
        &self,
        clave: ClaveSensor,
    ) -> Result<Vec<SensorPlanta>, SensorPlantaError> {
        self.list_from_sensor(clave, false).await
    }

    pub async fn list_all_active_from_sensor(
        &self,
        clave: ClaveSensor,
    ) -> Result<Vec<SensorPlanta>, SensorPlantaError> {
        self.list_from_sensor(clave, true).await
    }

    pub async fn list_all_from_plant(
        &self,
        nombre_planta: &str,
    ) -> Result<Vec<SensorPlanta>, SensorPlantaError> {
        self.list_from_plant(nombre_planta, false).await
    }

    pub async fn list_all_active_from_plant(
        &self,
        nombre_planta: &str,
    ) -> Result<Vec<SensorPlanta>, SensorPlantaError> {
        self.list_from_plant(nombre_planta, true).await
    }

    /// Stamp `fecha` on every active association of the sensor.
    pub async fn unsubscribe_all_from_sensor(
        &self,
        clave: ClaveSensor,
        fecha: OffsetDateTime,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<u64, SensorPlantaError> {
        let result = sqlx::query(
            r#"
            UPDATE sensores_plantas
            SET fecha_eliminacion = $1
            WHERE tipo_sensor = $2 AND zona_sensor = $3 AND numero_sensor = $4
              AND fecha_eliminacion IS NULL
            "#,
        )
        .bind(fecha)
        .bind(clave.tipo_sensor)
        .bind(clave.zona_sensor)
        .bind(clave.numero_sensor)
        .execute(&mut **transaction)
        .await?;

        Ok(result.rows_affected())
    }

    /// Stamp `fecha` on every active association of the plant.
    pub async fn unsubscribe_all_from_plant(
        &self,
        nombre_planta: &str,
        fecha: OffsetDateTime,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<u64, SensorPlantaError> {
        let result = sqlx::query(
            r#"
            UPDATE sensores_plantas
            SET fecha_eliminacion = $1
            WHERE nombre_planta = $2 AND fecha_eliminacion IS NULL
            "#,
        )
        .bind(fecha)
        .bind(nombre_planta)
        .execute(&mut **transaction)
        .await?;

        Ok(result.rows_affected())
    }
}
