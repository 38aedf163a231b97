use std::sync::Arc;

use macetero_api::models::{TipoMedida, ZonaSensor};
use sqlx::{Sqlite, Transaction};

use crate::configs::Storage;
use crate::errors::ConsejoPlantaError;
use crate::models::ConsejoPlanta;

use super::{is_blank, is_unique_violation};

/// Optional criteria for advice listings; `None` matches any value.
#[derive(Clone, Debug, Default)]
pub struct FiltroConsejo {
    pub nombre_planta: Option<String>,
    pub zona_consejo: Option<ZonaSensor>,
    pub tipo_medida: Option<TipoMedida>,
}

pub struct ConsejoPlantaRepository {
    storage: Arc<Storage>,
}

impl ConsejoPlantaRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }
}

impl ConsejoPlantaRepository {
    fn validate(item: &ConsejoPlanta) -> Result<(), ConsejoPlantaError> {
        if is_blank(&item.descripcion) {
            return Err(ConsejoPlantaError::DatoRequerido("La descripción del consejo es obligatoria."));
        }
        if is_blank(&item.nombre_planta) {
            return Err(ConsejoPlantaError::DatoRequerido("El nombre de la planta es obligatorio."));
        }
        if !item.valor_minimo.is_finite() || !item.valor_maximo.is_finite() {
            return Err(ConsejoPlantaError::DatoRequerido("Los valores mínimo y máximo son obligatorios."));
        }
        let horas_validas = [item.horas_minimas, item.horas_maximas]
            .into_iter()
            .flatten()
            .all(f64::is_finite);
        if !horas_validas {
            return Err(ConsejoPlantaError::DatoRequerido("Las horas del consejo no son válidas."));
        }

        Ok(())
    }

    fn no_existe(nombre_planta: &str, zona: ZonaSensor, tipo: TipoMedida) -> ConsejoPlantaError {
        ConsejoPlantaError::ConsejoPlantaNoExiste {
            nombre_planta: nombre_planta.to_string(),
            zona_consejo: zona,
            tipo_medida: tipo,
        }
    }

    pub async fn create(
        &self,
        item: &ConsejoPlanta,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<i32, ConsejoPlantaError> {
        Self::validate(item)?;

        let id = sqlx::query(
            r#"
            INSERT INTO consejos_planta (
                descripcion, nombre_planta, zona_consejo, tipo_medida, unidad_medida,
                valor_minimo, valor_maximo, horas_minimas, horas_maximas
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(&item.descripcion)
        .bind(&item.nombre_planta)
        .bind(item.zona_consejo)
        .bind(item.tipo_medida)
        .bind(item.unidad_medida)
        .bind(item.valor_minimo)
        .bind(item.valor_maximo)
        .bind(item.horas_minimas)
        .bind(item.horas_maximas)
        .execute(&mut **transaction)
        .await
        .map_err(|e| match is_unique_violation(&e) {
            true => ConsejoPlantaError::ConsejoPlantaExiste {
                nombre_planta: item.nombre_planta.clone(),
                zona_consejo: item.zona_consejo,
                tipo_medida: item.tipo_medida,
            },
            false => ConsejoPlantaError::Database(e),
        })?
        .last_insert_rowid();

        Ok(id as i32)
    }

    pub async fn find(
        &self,
        nombre_planta: &str,
        zona: ZonaSensor,
        tipo: TipoMedida,
    ) -> Result<Option<ConsejoPlanta>, ConsejoPlantaError> {
        let consejo: Option<ConsejoPlanta> = sqlx::query_as(
            r#"
            SELECT * FROM consejos_planta
            WHERE nombre_planta = $1 AND zona_consejo = $2 AND tipo_medida = $3
            "#,
        )
        .bind(nombre_planta)
        .bind(zona)
        .bind(tipo)
        .fetch_optional(self.storage.get_pool())
        .await?;

        Ok(consejo)
    }

    pub async fn get(
        &self,
        nombre_planta: &str,
        zona: ZonaSensor,
        tipo: TipoMedida,
    ) -> Result<ConsejoPlanta, ConsejoPlantaError> {
        if is_blank(nombre_planta) {
            return Err(ConsejoPlantaError::DatoRequerido("El nombre de la planta es obligatorio."));
        }

        self.find(nombre_planta, zona, tipo)
            .await?
            .ok_or_else(|| Self::no_existe(nombre_planta, zona, tipo))
    }

    pub async fn exists(
        &self,
        nombre_planta: &str,
        zona: ZonaSensor,
        tipo: TipoMedida,
    ) -> Result<bool, ConsejoPlantaError> {
        Ok(self.find(nombre_planta, zona, tipo).await?.is_some())
    }

    pub async fn list(&self, filtro: &FiltroConsejo) -> Result<Vec<ConsejoPlanta>, ConsejoPlantaError> {
        let consejos: Vec<ConsejoPlanta> = sqlx::query_as(
            r#"
            SELECT * FROM consejos_planta
            WHERE ($1 IS NULL OR nombre_planta = $1)
              AND ($2 IS NULL OR zona_consejo = $2)
              AND ($3 IS NULL OR tipo_medida = $3)
            ORDER BY nombre_planta, zona_consejo, tipo_medida
            "#,
        )
        .bind(&filtro.nombre_planta)
        .bind(filtro.zona_consejo)
        .bind(filtro.tipo_medida)
        .fetch_all(self.storage.get_pool())
        .await?;

        Ok(consejos)
    }

    pub async fn list_all(&self) -> Result<Vec<ConsejoPlanta>, ConsejoPlantaError> {
        self.list(&FiltroConsejo::default()).await
    }

    pub async fn list_all_from_plant(
        &self,
        nombre_planta: &str,
    ) -> Result<Vec<ConsejoPlanta>, ConsejoPlantaError> {
        self.list(&FiltroConsejo {
            nombre_planta: Some(nombre_planta.to_string()),
            ..Default::default()
        })
        .await
    }

    pub async fn list_all_from_zone(
        &self,
        zona: ZonaSensor,
    ) -> Result<Vec<ConsejoPlanta>, ConsejoPlantaError> {
        self.list(&FiltroConsejo {
            zona_consejo: Some(zona),
            ..Default::default()
        })
        .await
    }

    pub async fn list_all_from_tipo_medida(
        &self,
        tipo: TipoMedida,
    ) -> Result<Vec<ConsejoPlanta>, ConsejoPlantaError> {
        self.list(&FiltroConsejo {
            tipo_medida: Some(tipo),
            ..Default::default()
        })
        .await
    }

    pub async fn list_all_from_plant_and_zone(
        &self,
        nombre_planta: &str,
        zona: ZonaSensor,
    ) -> Result<Vec<ConsejoPlanta>, ConsejoPlantaError> {
        self.list(&FiltroConsejo {
            nombre_planta: Some(nombre_planta.to_string()),
            zona_consejo: Some(zona),
            ..Default::default()
        })
        .await
    }

    pub async fn list_all_from_plant_and_tipo_medida(
        &self,
        nombre_planta: &str,
        tipo: TipoMedida,
    ) -> Result<Vec<ConsejoPlanta>, ConsejoPlantaError> {
        self.list(&FiltroConsejo {
            nombre_planta: Some(nombre_planta.to_string()),
            tipo_medida: Some(tipo),
            ..Default::default()
        })
        .await
    }

    pub async fn update(
        &self,
        item: &ConsejoPlanta,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<ConsejoPlanta, ConsejoPlantaError> {
        Self::validate(item)?;

        let consejo: Option<ConsejoPlanta> = sqlx::query_as(
            r#"
            UPDATE consejos_planta
            SET descripcion = $1, unidad_medida = $2, valor_minimo = $3, valor_maximo = $4,
                horas_minimas = $5, horas_maximas = $6
            WHERE nombre_planta = $7 AND zona_consejo = $8 AND tipo_medida = $9
            RETURNING *
            "#,
        )
        .bind(&item.descripcion)
        .bind(item.unidad_medida)
        .bind(item.valor_minimo)
        .bind(item.valor_maximo)
        .bind(item.horas_minimas)
        .bind(item.horas_maximas)
        .bind(&item.nombre_planta)
        .bind(item.zona_consejo)
        .bind(item.tipo_medida)
        .fetch_optional(&mut **transaction)
        .await?;

        consejo.ok_or_else(|| Self::no_existe(&item.nombre_planta, item.zona_consejo, item.tipo_medida))
    }

    pub async fn delete(
        &self,
        nombre_planta: &str,
        zona: ZonaSensor,
        tipo: TipoMedida,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<(), ConsejoPlantaError> {
        let result = sqlx::query(
            r#"
            DELETE FROM consejos_planta
            WHERE nombre_planta = $1 AND zona_consejo = $2 AND tipo_medida = $3
            "#,
        )
        .bind(nombre_planta)
        .bind(zona)
        .bind(tipo)
        .execute(&mut **transaction)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Self::no_existe(nombre_planta, zona, tipo));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use macetero_api::models::UnidadMedida;

    use crate::tests::{create_test_consejo, setup_test_db};

    use super::*;

    fn consejo(nombre: &str, zona: ZonaSensor, tipo: TipoMedida) -> ConsejoPlanta {
        ConsejoPlanta {
            id: 0,
            descripcion: "Riego moderado".to_string(),
            nombre_planta: nombre.to_string(),
            zona_consejo: zona,
            tipo_medida: tipo,
            unidad_medida: UnidadMedida::Porcentaje,
            valor_minimo: 30.0,
            valor_maximo: 60.0,
            horas_minimas: None,
            horas_maximas: None,
        }
    }

    #[tokio::test]
    async fn test_create_consejo() {
        let storage = setup_test_db().await;
        let repo = ConsejoPlantaRepository::new(storage.clone());

        let mut tx = storage.begin().await.unwrap();
        repo.create(&consejo("Aloe", ZonaSensor::Maceta, TipoMedida::Humedad), &mut tx)
            .await
            .unwrap();
        tx.commit().await.unwrap();

        let found = repo
            .get("Aloe", ZonaSensor::Maceta, TipoMedida::Humedad)
            .await
            .unwrap();
        assert_eq!(found.valor_minimo, 30.0);
        assert_eq!(found.unidad_medida, UnidadMedida::Porcentaje);
        assert!(found.horas_minimas.is_none());
    }

    #[tokio::test]
    async fn test_create_duplicate_consejo() {
        let storage = setup_test_db().await;
        let repo = ConsejoPlantaRepository::new(storage.clone());
        create_test_consejo(storage.clone(), "Aloe", ZonaSensor::Ambiente, TipoMedida::Temperatura).await;

        let mut tx = storage.begin().await.unwrap();
        let err = repo
            .create(&consejo("Aloe", ZonaSensor::Ambiente, TipoMedida::Temperatura), &mut tx)
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "El consejo de la planta Aloe para la medida TEMPERATURA en la zona AMBIENTE ya está registrado."
        );
    }

    #[tokio::test]
    async fn test_create_rejects_missing_values() {
        let storage = setup_test_db().await;
        let repo = ConsejoPlantaRepository::new(storage.clone());
        let mut item = consejo("Aloe", ZonaSensor::Maceta, TipoMedida::Humedad);
        item.valor_maximo = f64::NAN;

        let mut tx = storage.begin().await.unwrap();
        let result = repo.create(&item, &mut tx).await;
        assert!(matches!(result, Err(ConsejoPlantaError::DatoRequerido(_))));

        item.valor_maximo = 60.0;
        item.descripcion = String::new();
        let result = repo.create(&item, &mut tx).await;
        assert!(matches!(result, Err(ConsejoPlantaError::DatoRequerido(_))));
    }

    #[tokio::test]
    async fn test_get_requires_plant_name() {
        let storage = setup_test_db().await;
        let repo = ConsejoPlantaRepository::new(storage);

        let result = repo.get("", ZonaSensor::Maceta, TipoMedida::Humedad).await;
        assert!(matches!(result, Err(ConsejoPlantaError::DatoRequerido(_))));

        let result = repo.get("Aloe", ZonaSensor::Maceta, TipoMedida::Humedad).await;
        assert!(matches!(result, Err(ConsejoPlantaError::ConsejoPlantaNoExiste { .. })));
    }

    #[tokio::test]
    async fn test_list_variants() {
        let storage = setup_test_db().await;
        let repo = ConsejoPlantaRepository::new(storage.clone());
        create_test_consejo(storage.clone(), "Aloe", ZonaSensor::Ambiente, TipoMedida::Temperatura).await;
        create_test_consejo(storage.clone(), "Aloe", ZonaSensor::Maceta, TipoMedida::Humedad).await;
        create_test_consejo(storage.clone(), "Ficus", ZonaSensor::Ambiente, TipoMedida::Humedad).await;

        assert_eq!(repo.list_all().await.unwrap().len(), 3);
        assert_eq!(repo.list_all_from_plant("Aloe").await.unwrap().len(), 2);
        assert_eq!(repo.list_all_from_zone(ZonaSensor::Ambiente).await.unwrap().len(), 2);
        assert_eq!(
            repo.list_all_from_tipo_medida(TipoMedida::Humedad)
                .await
                .unwrap()
                .len(),
            2
        );
        assert_eq!(
            repo.list_all_from_plant_and_zone("Aloe", ZonaSensor::Maceta)
                .await
                .unwrap()
                .len(),
            1
        );
        assert!(
            repo.list_all_from_plant_and_tipo_medida("Ficus", TipoMedida::Temperatura)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let storage = setup_test_db().await;
        let repo = ConsejoPlantaRepository::new(storage.clone());
        let mut item =
            create_test_consejo(storage.clone(), "Aloe", ZonaSensor::Ambiente, TipoMedida::Temperatura).await;

        item.valor_maximo = 35.5;
        item.horas_maximas = Some(10.0);

        let mut tx = storage.begin().await.unwrap();
        let updated = repo.update(&item, &mut tx).await.unwrap();
        tx.commit().await.unwrap();
        assert_eq!(updated.valor_maximo, 35.5);
        assert_eq!(updated.horas_maximas, Some(10.0));

        let mut tx = storage.begin().await.unwrap();
        repo.delete("Aloe", ZonaSensor::Ambiente, TipoMedida::Temperatura, &mut tx)
            .await
            .unwrap();
        tx.commit().await.unwrap();

        assert!(
            !repo
                .exists("Aloe", ZonaSensor::Ambiente, TipoMedida::Temperatura)
                .await
                .unwrap()
        );

        let mut tx = storage.begin().await.unwrap();
        let result = repo
            .delete("Aloe", ZonaSensor::Ambiente, TipoMedida::Temperatura, &mut tx)
            .await;
        assert!(matches!(result, Err(ConsejoPlantaError::ConsejoPlantaNoExiste { .. })));
    }
}
