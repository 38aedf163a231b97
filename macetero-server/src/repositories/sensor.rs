use std::sync::Arc;

use macetero_api::models::{ClaveSensor, ModeloSensor, TipoSensor, ZonaSensor};
use sqlx::{Sqlite, Transaction};

use crate::configs::Storage;
use crate::errors::SensorError;
use crate::models::Sensor;

use super::{is_blank, is_unique_violation};

/// Optional criteria for sensor listings; `None` matches any value.
#[derive(Clone, Copy, Debug, Default)]
pub struct FiltroSensor {
    pub tipo_sensor: Option<TipoSensor>,
    pub zona_sensor: Option<ZonaSensor>,
    pub modelo_sensor: Option<ModeloSensor>,
    pub solo_activos: bool,
}

pub struct SensorRepository {
    storage: Arc<Storage>,
}

impl SensorRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }
}

impl SensorRepository {
    fn validate(item: &Sensor) -> Result<(), SensorError> {
        if is_blank(&item.nombre_sensor) {
            return Err(SensorError::DatoRequerido("El nombre del sensor es obligatorio."));
        }

        Ok(())
    }

    pub async fn create(
        &self,
        item: &Sensor,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<i32, SensorError> {
        Self::validate(item)?;

        let id = sqlx::query(
            r#"
            INSERT INTO sensores (
                tipo_sensor, zona_sensor, numero_sensor, modelo_sensor, nombre_sensor, direccion_lectura,
                patilla_0_lectura, patilla_1_lectura, patilla_2_lectura, patilla_3_lectura,
                unidad_medida_0, unidad_medida_1, unidad_medida_2, unidad_medida_3,
                fecha_creacion, fecha_eliminacion
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            "#,
        )
        .bind(item.tipo_sensor)
        .bind(item.zona_sensor)
        .bind(item.numero_sensor)
        .bind(item.modelo_sensor)
        .bind(&item.nombre_sensor)
        .bind(&item.direccion_lectura)
        .bind(item.patilla_0_lectura)
        .bind(item.patilla_1_lectura)
        .bind(item.patilla_2_lectura)
        .bind(item.patilla_3_lectura)
        .bind(item.unidad_medida_0)
        .bind(item.unidad_medida_1)
        .bind(item.unidad_medida_2)
        .bind(item.unidad_medida_3)
        .bind(item.fecha_creacion)
        .bind(item.fecha_eliminacion)
        .execute(&mut **transaction)
        .await
        .map_err(|e| match is_unique_violation(&e) {
            true => SensorError::SensorExiste(item.clave()),
            false => SensorError::Database(e),
        })?
        .last_insert_rowid();

        Ok(id as i32)
    }

    pub async fn find(&self, clave: ClaveSensor) -> Result<Option<Sensor>, SensorError> {
        let sensor: Option<Sensor> = sqlx::query_as(
            r#"
            SELECT * FROM sensores
            WHERE tipo_sensor = $1 AND zona_sensor = $2 AND numero_sensor = $3
            "#,
        )
        .bind(clave.tipo_sensor)
        .bind(clave.zona_sensor)
        .bind(clave.numero_sensor)
        .fetch_optional(self.storage.get_pool())
        .await?;

        Ok(sensor)
    }

    pub async fn get(&self, clave: ClaveSensor) -> Result<Sensor, SensorError> {
        self.find(clave)
            .await?
            .ok_or(SensorError::SensorNoExiste(clave))
    }

    pub async fn exists(&self, clave: ClaveSensor) -> Result<bool, SensorError> {
        Ok(self.find(clave).await?.is_some())
    }

    pub async fn list(&self, filtro: FiltroSensor) -> Result<Vec<Sensor>, SensorError> {
        let sensores: Vec<Sensor> = sqlx::query_as(
            r#"
            SELECT * FROM sensores
            WHERE ($1 IS NULL OR tipo_sensor = $1)
              AND ($2 IS NULL OR zona_sensor = $2)
              AND ($3 IS NULL OR modelo_sensor = $3)
              AND (NOT $4 OR fecha_eliminacion IS NULL)
            ORDER BY tipo_sensor, zona_sensor, numero_sensor
            "#,
        )
        .bind(filtro.tipo_sensor)
        .bind(filtro.zona_sensor)
        .bind(filtro.modelo_sensor)
        .bind(filtro.solo_activos)
        .fetch_all(self.storage.get_pool())
        .await?;

        Ok(sensores)
    }

    pub async fn list_all(&self) -> Result<Vec<Sensor>, SensorError> {
        self.list(FiltroSensor::default()).await
    }

    pub async fn list_all_active(&self) -> Result<Vec<Sensor>, SensorError> {
        self.list(FiltroSensor {
            solo_activos: true,
            ..Default::default()
        })
        .await
    }

    pub async fn list_all_from_type(&self, tipo: TipoSensor) -> Result<Vec<Sensor>, SensorError> {
        self.list(FiltroSensor {
            tipo_sensor: Some(tipo),
            ..Default::default()
        })
        .await
    }

    pub async fn list_all_active_from_type(
        &self,
        tipo: TipoSensor,
    ) -> Result<Vec<Sensor>, SensorError> {
        self.list(FiltroSensor {
            tipo_sensor: Some(tipo),
            solo_activos: true,
            ..Default::default()
        })
        .await
    }

    pub async fn list_all_from_zone(&self, zona: ZonaSensor) -> Result<Vec<Sensor>, SensorError> {
        self.list(FiltroSensor {
            zona_sensor: Some(zona),
            ..Default::default()
        })
        .await
    }

    pub async fn list_all_active_from_zone(
        &self,
        zona: ZonaSensor,
    ) -> Result<Vec<Sensor>, SensorError> {
        self.list(FiltroSensor {
            zona_sensor: Some(zona),
            solo_activos: true,
            ..Default::default()
        })
        .await
    }

    pub async fn list_all_from_type_and_zone(
        &self,
        tipo: TipoSensor,
        zona: ZonaSensor,
    ) -> Result<Vec<Sensor>, SensorError> {
        self.list(FiltroSensor {
            tipo_sensor: Some(tipo),
            zona_sensor: Some(zona),
            ..Default::default()
        })
        .await
    }

    pub async fn list_all_active_from_type_and_zone(
        &self,
        tipo: TipoSensor,
        zona: ZonaSensor,
    ) -> Result<Vec<Sensor>, SensorError> {
        self.list(FiltroSensor {
            tipo_sensor: Some(tipo),
            zona_sensor: Some(zona),
            solo_activos: true,
            ..Default::default()
        })
        .await
    }

    pub async fn list_all_from_model(
        &self,
        modelo: ModeloSensor,
    ) -> Result<Vec<Sensor>, SensorError> {
        self.list(FiltroSensor {
            modelo_sensor: Some(modelo),
            ..Default::default()
        })
        .await
    }

    pub async fn list_all_active_from_model(
        &self,
        modelo: ModeloSensor,
    ) -> Result<Vec<Sensor>, SensorError> {
        self.list(FiltroSensor {
            modelo_sensor: Some(modelo),
            solo_activos: true,
            ..Default::default()
        })
        .await
    }

    pub async fn update(
        &self,
        item: &Sensor,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<Sensor, SensorError> {
        Self::validate(item)?;

        let sensor: Option<Sensor> = sqlx::query_as(
            r#"
            UPDATE sensores
            SET modelo_sensor = $1, nombre_sensor = $2, direccion_lectura = $3,
                patilla_0_lectura = $4, patilla_1_lectura = $5, patilla_2_lectura = $6, patilla_3_lectura = $7,
                unidad_medida_0 = $8, unidad_medida_1 = $9, unidad_medida_2 = $10, unidad_medida_3 = $11,
                fecha_creacion = $12, fecha_eliminacion = $13
            WHERE tipo_sensor = $14 AND zona_sensor = $15 AND numero_sensor = $16
            RETURNING *
            "#,
        )
        .bind(item.modelo_sensor)
        .bind(&item.nombre_sensor)
        .bind(&item.direccion_lectura)
        .bind(item.patilla_0_lectura)
        .bind(item.patilla_1_lectura)
        .bind(item.patilla_2_lectura)
        .bind(item.patilla_3_lectura)
        .bind(item.unidad_medida_0)
        .bind(item.unidad_medida_1)
        .bind(item.unidad_medida_2)
        .bind(item.unidad_medida_3)
        .bind(item.fecha_creacion)
        .bind(item.fecha_eliminacion)
        .bind(item.tipo_sensor)
        .bind(item.zona_sensor)
        .bind(item.numero_sensor)
        .fetch_optional(&mut **transaction)
        .await?;

        sensor.ok_or(SensorError::SensorNoExiste(item.clave()))
    }
}
