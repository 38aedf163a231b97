//! Fixtures shared by unit and integration tests.

use std::sync::Arc;

use macetero_api::models::{ClaveSensor, ModeloSensor, TipoMedida, UnidadMedida, ZonaSensor};
use time::OffsetDateTime;

use crate::configs::{Database, SchemaManager, Storage};
use crate::models::{ConsejoPlanta, Planta, RegistroSensor, Sensor, SensorPlanta};
use crate::repositories::fecha_ordenable;

pub async fn setup_test_db() -> Arc<Storage> {
    Arc::new(
        Storage::new(
            Database {
                migration_path: None,
                clean_start: true,
                url: String::from("sqlite::memory:"),
            },
            SchemaManager::default(),
        )
        .await
        .unwrap(),
    )
}

pub async fn create_test_planta(storage: Arc<Storage>, nombre_planta: &str) -> Planta {
    sqlx::query_as(
        r#"
        INSERT INTO plantas (nombre_planta, tipo_planta, descripcion, fecha_creacion)
        VALUES ($1, 'Test Tipo', 'Planta de prueba', $2)
        RETURNING *
        "#,
    )
    .bind(nombre_planta)
    .bind(OffsetDateTime::now_utc())
    .fetch_one(storage.get_pool())
    .await
    .unwrap()
}

pub async fn create_test_sensor(storage: Arc<Storage>, clave: ClaveSensor) -> Sensor {
    let modelo = match clave.zona_sensor {
        ZonaSensor::Maceta => ModeloSensor::Hw390,
        _ => ModeloSensor::Dht22,
    };

    sqlx::query_as(
        r#"
        INSERT INTO sensores (tipo_sensor, zona_sensor, numero_sensor, modelo_sensor, nombre_sensor, patilla_0_lectura, fecha_creacion)
        VALUES ($1, $2, $3, $4, $5, 4, $6)
        RETURNING *
        "#,
    )
    .bind(clave.tipo_sensor)
    .bind(clave.zona_sensor)
    .bind(clave.numero_sensor)
    .bind(modelo)
    .bind(format!("Sensor {clave}"))
    .bind(OffsetDateTime::now_utc())
    .fetch_one(storage.get_pool())
    .await
    .unwrap()
}

pub async fn create_test_sensor_planta(
    storage: Arc<Storage>,
    clave: ClaveSensor,
    nombre_planta: &str,
) -> SensorPlanta {
    sqlx::query_as(
        r#"
        INSERT INTO sensores_plantas (tipo_sensor, zona_sensor, numero_sensor, nombre_planta, fecha_asociacion)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(clave.tipo_sensor)
    .bind(clave.zona_sensor)
    .bind(clave.numero_sensor)
    .bind(nombre_planta)
    .bind(OffsetDateTime::now_utc())
    .fetch_one(storage.get_pool())
    .await
    .unwrap()
}

pub async fn create_test_registro(
    storage: Arc<Storage>,
    clave: ClaveSensor,
    nombre_planta: &str,
    valor: f64,
    fecha: OffsetDateTime,
) -> RegistroSensor {
    sqlx::query_as(
        r#"
        INSERT INTO registros_sensor (tipo_sensor, zona_sensor, numero_sensor, valor, escala, nombre_planta, fecha)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(clave.tipo_sensor)
    .bind(clave.zona_sensor)
    .bind(clave.numero_sensor)
    .bind(valor)
    .bind(escala_de(clave))
    .bind(nombre_planta)
    .bind(fecha_ordenable(fecha).unwrap())
    .fetch_one(storage.get_pool())
    .await
    .unwrap()
}

pub async fn create_test_consejo(
    storage: Arc<Storage>,
    nombre_planta: &str,
    zona_consejo: ZonaSensor,
    tipo_medida: TipoMedida,
) -> ConsejoPlanta {
    sqlx::query_as(
        r#"
        INSERT INTO consejos_planta (descripcion, nombre_planta, zona_consejo, tipo_medida, unidad_medida, valor_minimo, valor_maximo, horas_minimas)
        VALUES ('Mantener en rango', $1, $2, $3, $4, 10.0, 30.0, 6.0)
        RETURNING *
        "#,
    )
    .bind(nombre_planta)
    .bind(zona_consejo)
    .bind(tipo_medida)
    .bind(UnidadMedida::GradosCentigrados)
    .fetch_one(storage.get_pool())
    .await
    .unwrap()
}

fn escala_de(clave: ClaveSensor) -> &'static str {
    use macetero_api::models::TipoSensor;

    match clave.tipo_sensor {
        TipoSensor::Temperatura => "C",
        TipoSensor::Humedad => "%",
        TipoSensor::Luminosidad => "lx",
    }
}
