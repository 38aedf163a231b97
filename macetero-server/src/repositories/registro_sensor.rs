use std::sync::Arc;

use macetero_api::models::ClaveSensor;
use sqlx::{Sqlite, Transaction};
use time::OffsetDateTime;

use crate::configs::Storage;
use crate::errors::RegistroSensorError;
use crate::models::RegistroSensor;

use super::{fecha_ordenable, is_blank, is_foreign_key_violation};

// `fecha` is stored as fixed-width UTC text (see `fecha_ordenable`), so range
// bounds and ordering compare it as plain text.

pub struct RegistroSensorRepository {
    storage: Arc<Storage>,
}

impl RegistroSensorRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }
}

impl RegistroSensorRepository {
    fn validate(item: &RegistroSensor) -> Result<(), RegistroSensorError> {
        if is_blank(&item.escala) {
            return Err(RegistroSensorError::DatoRequerido("La escala del registro es obligatoria."));
        }
        if is_blank(&item.nombre_planta) {
            return Err(RegistroSensorError::DatoRequerido("El nombre de la planta es obligatorio."));
        }
        if !item.valor.is_finite() {
            return Err(RegistroSensorError::DatoRequerido("El valor del registro no es válido."));
        }

        Ok(())
    }

    pub async fn create(
        &self,
        item: &RegistroSensor,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<i32, RegistroSensorError> {
        Self::validate(item)?;

        let id = sqlx::query(
            r#"
            INSERT INTO registros_sensor (tipo_sensor, zona_sensor, numero_sensor, valor, escala, nombre_planta, fecha)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(item.tipo_sensor)
        .bind(item.zona_sensor)
        .bind(item.numero_sensor)
        .bind(item.valor)
        .bind(&item.escala)
        .bind(&item.nombre_planta)
        .bind(fecha_ordenable(item.fecha)?)
        .execute(&mut **transaction)
        .await
        .map_err(|e| match is_foreign_key_violation(&e) {
            true => RegistroSensorError::ReferenciaNoExiste {
                clave: item.clave(),
                nombre_planta: item.nombre_planta.clone(),
            },
            false => RegistroSensorError::Database(e),
        })?
        .last_insert_rowid();

        Ok(id as i32)
    }

    pub async fn find(&self, id: i32) -> Result<Option<RegistroSensor>, RegistroSensorError> {
        let registro: Option<RegistroSensor> =
            sqlx::query_as("SELECT * FROM registros_sensor WHERE id = $1")
                .bind(id)
                .fetch_optional(self.storage.get_pool())
                .await?;

        Ok(registro)
    }

    pub async fn get(&self, id: i32) -> Result<RegistroSensor, RegistroSensorError> {
        self.find(id)
            .await?
            .ok_or(RegistroSensorError::RegistroSensorNoExiste(id))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, RegistroSensorError> {
        Ok(self.find(id).await?.is_some())
    }

    pub async fn list_all(&self) -> Result<Vec<RegistroSensor>, RegistroSensorError> {
        let registros: Vec<RegistroSensor> =
            sqlx::query_as("SELECT * FROM registros_sensor ORDER BY fecha, id")
                .fetch_all(self.storage.get_pool())
                .await?;

        Ok(registros)
    }

    pub async fn list_all_from_sensor(
        &self,
        clave: ClaveSensor,
    ) -> Result<Vec<RegistroSensor>, RegistroSensorError> {
        let registros: Vec<RegistroSensor> = sqlx::query_as(
            r#"
            SELECT * FROM registros_sensor
            WHERE tipo_sensor = $1 AND zona_sensor = $2 AND numero_sensor = $3
            ORDER BY fecha, id
            "#,
        )
        .bind(clave.tipo_sensor)
        .bind(clave.zona_sensor)
        .bind(clave.numero_sensor)
        .fetch_all(self.storage.get_pool())
        .await?;

        Ok(registros)
    }

    /// Readings of a sensor with `inicio <= fecha <= fin`.
    pub async fn list_all_from_sensor_between_dates(
        &self,
        clave: ClaveSensor,
        inicio: OffsetDateTime,
        fin: OffsetDateTime,
    ) -> Result<Vec<RegistroSensor>, RegistroSensorError> {
        let registros: Vec<RegistroSensor> = sqlx::query_as(
            r#"
            SELECT * FROM registros_sensor
            WHERE tipo_sensor = $1 AND zona_sensor = $2 AND numero_sensor = $3
              AND fecha >= $4 AND fecha <= $5
            ORDER BY fecha, id
            "#,
        )
        .bind(clave.tipo_sensor)
        .bind(clave.zona_sensor)
        .bind(clave.numero_sensor)
        .bind(fecha_ordenable(inicio)?)
        .bind(fecha_ordenable(fin)?)
        .fetch_all(self.storage.get_pool())
        .await?;

        Ok(registros)
    }

    pub async fn list_all_from_plant(
        &self,
        nombre_planta: &str,
    ) -> Result<Vec<RegistroSensor>, RegistroSensorError> {
        let registros: Vec<RegistroSensor> = sqlx::query_as(
            r#"
            SELECT * FROM registros_sensor
            WHERE nombre_planta = $1
            ORDER BY fecha, id
            "#,
        )
        .bind(nombre_planta)
        .fetch_all(self.storage.get_pool())
        .await?;

        Ok(registros)
    }

    /// Readings of a plant with `inicio <= fecha <= fin`.
    pub async fn list_all_from_plant_between_dates(
        &self,
        nombre_planta: &str,
        inicio: OffsetDateTime,
        fin: OffsetDateTime,
    ) -> Result<Vec<RegistroSensor>, RegistroSensorError> {
        let registros: Vec<RegistroSensor> = sqlx::query_as(
            r#"
            SELECT * FROM registros_sensor
            WHERE nombre_planta = $1
              AND fecha >= $2 AND fecha <= $3
            ORDER BY fecha, id
            "#,
        )
        .bind(nombre_planta)
        .bind(fecha_ordenable(inicio)?)
        .bind(fecha_ordenable(fin)?)
        .fetch_all(self.storage.get_pool())
        .await?;

        Ok(registros)
    }

    /// Remove readings older than `fecha`, returning how many were deleted.
    pub async fn delete_before(
        &self,
        fecha: OffsetDateTime,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<u64, RegistroSensorError> {
        let result =
            sqlx::query("DELETE FROM registros_sensor WHERE fecha < $1")
                .bind(fecha_ordenable(fecha)?)
                .execute(&mut **transaction)
                .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use macetero_api::models::{TipoSensor, ZonaSensor};
    use time::macros::datetime;

    use crate::tests::{create_test_planta, create_test_registro, create_test_sensor, setup_test_db};

    use super::*;

    const TEMPERATURA: ClaveSensor = ClaveSensor {
        tipo_sensor: TipoSensor::Temperatura,
        zona_sensor: ZonaSensor::Ambiente,
        numero_sensor: 1,
    };

    const HUMEDAD: ClaveSensor = ClaveSensor {
        tipo_sensor: TipoSensor::Humedad,
        zona_sensor: ZonaSensor::Maceta,
        numero_sensor: 1,
    };

    async fn setup() -> Arc<Storage> {
        let storage = setup_test_db().await;
        create_test_planta(storage.clone(), "Aloe").await;
        create_test_planta(storage.clone(), "Ficus").await;
        create_test_sensor(storage.clone(), TEMPERATURA).await;
        create_test_sensor(storage.clone(), HUMEDAD).await;
        storage
    }

    fn registro(clave: ClaveSensor, planta: &str, valor: f64, fecha: OffsetDateTime) -> RegistroSensor {
        RegistroSensor {
            id: 0,
            tipo_sensor: clave.tipo_sensor,
            zona_sensor: clave.zona_sensor,
            numero_sensor: clave.numero_sensor,
            valor,
            escala: "C".to_string(),
            nombre_planta: planta.to_string(),
            fecha,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_registro() {
        let storage = setup().await;
        let repo = RegistroSensorRepository::new(storage.clone());

        let mut tx = storage.begin().await.unwrap();
        let id = repo
            .create(
                &registro(TEMPERATURA, "Aloe", 21.5, datetime!(2024-05-01 10:00:00 UTC)),
                &mut tx,
            )
            .await
            .unwrap();
        tx.commit().await.unwrap();

        let found = repo.get(id).await.unwrap();
        assert_eq!(found.valor, 21.5);
        assert_eq!(found.fecha, datetime!(2024-05-01 10:00:00 UTC));
        assert!(repo.exists(id).await.unwrap());
    }

    #[tokio::test]
    async fn test_get_missing_registro() {
        let storage = setup().await;
        let repo = RegistroSensorRepository::new(storage);

        assert!(!repo.exists(42).await.unwrap());
        let err = repo.get(42).await.unwrap_err();
        assert_eq!(err.to_string(), "El registro de sensor 42 no existe");
    }

    #[tokio::test]
    async fn test_create_requires_known_sensor_and_plant() {
        let storage = setup().await;
        let repo = RegistroSensorRepository::new(storage.clone());
        let desconocido = ClaveSensor::new(TipoSensor::Luminosidad, ZonaSensor::Exterior, 3);

        let mut tx = storage.begin().await.unwrap();
        let result = repo
            .create(
                &registro(desconocido, "Aloe", 100.0, datetime!(2024-05-01 10:00:00 UTC)),
                &mut tx,
            )
            .await;
        assert!(matches!(result, Err(RegistroSensorError::ReferenciaNoExiste { .. })));

        let result = repo
            .create(
                &registro(TEMPERATURA, "Aloe", f64::INFINITY, datetime!(2024-05-01 10:00:00 UTC)),
                &mut tx,
            )
            .await;
        assert!(matches!(result, Err(RegistroSensorError::DatoRequerido(_))));
    }

    #[tokio::test]
    async fn test_list_from_sensor_and_plant_in_date_order() {
        let storage = setup().await;
        let repo = RegistroSensorRepository::new(storage.clone());
        create_test_registro(storage.clone(), TEMPERATURA, "Aloe", 22.0, datetime!(2024-05-01 12:00:00 UTC)).await;
        create_test_registro(storage.clone(), TEMPERATURA, "Aloe", 20.0, datetime!(2024-05-01 08:00:00.5 UTC)).await;
        create_test_registro(storage.clone(), HUMEDAD, "Aloe", 45.0, datetime!(2024-05-01 09:00:00 UTC)).await;
        create_test_registro(storage.clone(), TEMPERATURA, "Ficus", 19.0, datetime!(2024-05-01 07:00:00 UTC)).await;

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].nombre_planta, "Ficus");

        let temperatura = repo.list_all_from_sensor(TEMPERATURA).await.unwrap();
        let valores: Vec<f64> = temperatura.iter().map(|r| r.valor).collect();
        assert_eq!(valores, vec![19.0, 20.0, 22.0]);

        let aloe = repo.list_all_from_plant("Aloe").await.unwrap();
        let valores: Vec<f64> = aloe.iter().map(|r| r.valor).collect();
        assert_eq!(valores, vec![20.0, 45.0, 22.0]);
    }

    #[tokio::test]
    async fn test_date_ranges_are_inclusive() {
        let storage = setup().await;
        let repo = RegistroSensorRepository::new(storage.clone());
        create_test_registro(storage.clone(), TEMPERATURA, "Aloe", 1.0, datetime!(2024-05-01 00:00:00 UTC)).await;
        create_test_registro(storage.clone(), TEMPERATURA, "Aloe", 2.0, datetime!(2024-05-01 12:00:00 UTC)).await;
        create_test_registro(storage.clone(), TEMPERATURA, "Aloe", 3.0, datetime!(2024-05-02 00:00:00 UTC)).await;
        create_test_registro(storage.clone(), TEMPERATURA, "Aloe", 4.0, datetime!(2024-05-02 00:00:01 UTC)).await;

        let inicio = datetime!(2024-05-01 00:00:00 UTC);
        let fin = datetime!(2024-05-02 00:00:00 UTC);

        let por_sensor = repo
            .list_all_from_sensor_between_dates(TEMPERATURA, inicio, fin)
            .await
            .unwrap();
        let valores: Vec<f64> = por_sensor.iter().map(|r| r.valor).collect();
        assert_eq!(valores, vec![1.0, 2.0, 3.0]);

        let por_planta = repo
            .list_all_from_plant_between_dates("Aloe", inicio, inicio)
            .await
            .unwrap();
        assert_eq!(por_planta.len(), 1);
        assert_eq!(por_planta[0].valor, 1.0);

        let offset = datetime!(2024-05-02 02:00:00 +02:00);
        let con_offset = repo
            .list_all_from_plant_between_dates("Aloe", inicio, offset)
            .await
            .unwrap();
        assert_eq!(con_offset.len(), 3);
    }

    #[tokio::test]
    async fn test_date_ranges_are_exact_below_a_millisecond() {
        let storage = setup().await;
        let repo = RegistroSensorRepository::new(storage.clone());
        create_test_registro(storage.clone(), TEMPERATURA, "Aloe", 1.0, datetime!(2024-05-01 10:00:00.0004 UTC)).await;
        create_test_registro(storage.clone(), TEMPERATURA, "Aloe", 2.0, datetime!(2024-05-01 10:00:00.000000001 UTC)).await;

        let inicio = datetime!(2024-05-01 09:00:00 UTC);

        let hasta_antes = repo
            .list_all_from_plant_between_dates("Aloe", inicio, datetime!(2024-05-01 10:00:00.0001 UTC))
            .await
            .unwrap();
        let valores: Vec<f64> = hasta_antes.iter().map(|r| r.valor).collect();
        assert_eq!(valores, vec![2.0]);

        let hasta_exacto = repo
            .list_all_from_plant_between_dates("Aloe", inicio, datetime!(2024-05-01 10:00:00.0004 UTC))
            .await
            .unwrap();
        assert_eq!(hasta_exacto.len(), 2);
        assert_eq!(hasta_exacto[1].fecha, datetime!(2024-05-01 10:00:00.0004 UTC));

        let sin_nanosegundo = repo
            .list_all_from_sensor_between_dates(
                TEMPERATURA,
                inicio,
                datetime!(2024-05-01 10:00:00 UTC),
            )
            .await
            .unwrap();
        assert!(sin_nanosegundo.is_empty());

        let desde_despues = repo
            .list_all_from_sensor_between_dates(
                TEMPERATURA,
                datetime!(2024-05-01 10:00:00.0004001 UTC),
                datetime!(2024-05-01 11:00:00 UTC),
            )
            .await
            .unwrap();
        assert!(desde_despues.is_empty());
    }

    #[tokio::test]
    async fn test_delete_before_is_exact_below_a_millisecond() {
        let storage = setup().await;
        let repo = RegistroSensorRepository::new(storage.clone());
        create_test_registro(storage.clone(), HUMEDAD, "Aloe", 40.0, datetime!(2024-05-01 10:00:00.0003 UTC)).await;
        create_test_registro(storage.clone(), HUMEDAD, "Aloe", 41.0, datetime!(2024-05-01 10:00:00.0004 UTC)).await;

        let mut tx = storage.begin().await.unwrap();
        let removed = repo
            .delete_before(datetime!(2024-05-01 10:00:00.0004 UTC), &mut tx)
            .await
            .unwrap();
        tx.commit().await.unwrap();

        assert_eq!(removed, 1);
        let restantes = repo.list_all().await.unwrap();
        assert_eq!(restantes.len(), 1);
        assert_eq!(restantes[0].valor, 41.0);
    }

    #[tokio::test]
    async fn test_delete_before() {
        let storage = setup().await;
        let repo = RegistroSensorRepository::new(storage.clone());
        create_test_registro(storage.clone(), HUMEDAD, "Aloe", 40.0, datetime!(2024-04-01 10:00:00 UTC)).await;
        create_test_registro(storage.clone(), HUMEDAD, "Aloe", 41.0, datetime!(2024-05-01 10:00:00 UTC)).await;

        let mut tx = storage.begin().await.unwrap();
        let removed = repo
            .delete_before(datetime!(2024-05-01 00:00:00 UTC), &mut tx)
            .await
            .unwrap();
        tx.commit().await.unwrap();

        assert_eq!(removed, 1);
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }
}
