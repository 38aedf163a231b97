use std::sync::Arc;

use sqlx::{Sqlite, Transaction};

use crate::configs::Storage;
use crate::errors::PlantaError;
use crate::models::Planta;

use super::{is_blank, is_unique_violation};

pub struct PlantaRepository {
    storage: Arc<Storage>,
}

impl PlantaRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }
}

impl PlantaRepository {
    fn validate(item: &Planta) -> Result<(), PlantaError> {
        if is_blank(&item.nombre_planta) {
            return Err(PlantaError::DatoRequerido("El nombre de la planta es obligatorio."));
        }
        if is_blank(&item.tipo_planta) {
            return Err(PlantaError::DatoRequerido("El tipo de la planta es obligatorio."));
        }

        Ok(())
    }

    pub async fn create(
        &self,
        item: &Planta,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<i32, PlantaError> {
        Self::validate(item)?;

        let id = sqlx::query(
            r#"
            INSERT INTO plantas (nombre_planta, tipo_planta, descripcion, fecha_creacion, fecha_eliminacion)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&item.nombre_planta)
        .bind(&item.tipo_planta)
        .bind(&item.descripcion)
        .bind(item.fecha_creacion)
        .bind(item.fecha_eliminacion)
        .execute(&mut **transaction)
        .await
        .map_err(|e| match is_unique_violation(&e) {
            true => PlantaError::PlantaExiste(item.nombre_planta.clone()),
            false => PlantaError::Database(e),
        })?
        .last_insert_rowid();

        Ok(id as i32)
    }

    pub async fn find(&self, nombre_planta: &str) -> Result<Option<Planta>, PlantaError> {
        let planta: Option<Planta> =
            sqlx::query_as("SELECT * FROM plantas WHERE nombre_planta = $1")
                .bind(nombre_planta)
                .fetch_optional(self.storage.get_pool())
                .await?;

        Ok(planta)
    }

    pub async fn get(&self, nombre_planta: &str) -> Result<Planta, PlantaError> {
        self.find(nombre_planta)
            .await?
            .ok_or_else(|| PlantaError::PlantaNoExiste(nombre_planta.to_string()))
    }

    pub async fn exists(&self, nombre_planta: &str) -> Result<bool, PlantaError> {
        Ok(self.find(nombre_planta).await?.is_some())
    }

    pub async fn list_all(&self) -> Result<Vec<Planta>, PlantaError> {
        let plantas: Vec<Planta> = sqlx::query_as("SELECT * FROM plantas ORDER BY nombre_planta")
            .fetch_all(self.storage.get_pool())
            .await?;

        Ok(plantas)
    }

    pub async fn list_all_active(&self) -> Result<Vec<Planta>, PlantaError> {
        let plantas: Vec<Planta> = sqlx::query_as(
            "SELECT * FROM plantas WHERE fecha_eliminacion IS NULL ORDER BY nombre_planta",
        )
        .fetch_all(self.storage.get_pool())
        .await?;

        Ok(plantas)
    }

    pub async fn update(
        &self,
        item: &Planta,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<Planta, PlantaError> {
        Self::validate(item)?;

        let planta: Option<Planta> = sqlx::query_as(
            r#"
            UPDATE plantas
            SET tipo_planta = $1, descripcion = $2, fecha_creacion = $3, fecha_eliminacion = $4
            WHERE nombre_planta = $5
            RETURNING *
            "#,
        )
        .bind(&item.tipo_planta)
        .bind(&item.descripcion)
        .bind(item.fecha_creacion)
        .bind(item.fecha_eliminacion)
        .bind(&item.nombre_planta)
        .fetch_optional(&mut **transaction)
        .await?;

        planta.ok_or_else(|| PlantaError::PlantaNoExiste(item.nombre_planta.clone()))
    }
}
