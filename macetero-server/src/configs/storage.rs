use std::path::Path;
use std::str::FromStr;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Error, Pool, Sqlite, SqlitePool, Transaction};

use crate::configs::schema::{SchemaError, SchemaManager};
use crate::configs::settings::Database;

/// Shared handle to the SQLite pool every repository reads and writes through.
#[derive(Clone)]
pub struct Storage {
    pool: SqlitePool,
}

impl Storage {
    pub async fn new(database: Database, schema_manager: SchemaManager) -> Result<Self, Error> {
        // Readings and associations reject unknown sensors and plants
        let options = SqliteConnectOptions::from_str(&database.url)?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .min_connections(1) // an in-memory database is lost with its last connection
            .max_connections(10)
            .connect_with(options)
            .await?;

        let storage = Self { pool };

        if database.clean_start {
            storage.recreate_schema(&schema_manager).await?;
        }

        if let Some(migration_path) = &database.migration_path {
            storage.migrate(Path::new(migration_path)).await?;
        }

        Ok(storage)
    }

    pub fn get_pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Open the unit of work a service operation runs in.
    pub async fn begin(&self) -> Result<Transaction<'static, Sqlite>, Error> {
        self.pool.begin().await
    }

    /// Drop every table along with the migration history, then create the
    /// schema again, all in one transaction.
    async fn recreate_schema(&self, schema: &SchemaManager) -> Result<(), Error> {
        let configuration = |e: SchemaError| Error::Configuration(Box::new(e));

        let mut script = vec![String::from("DROP TABLE IF EXISTS _sqlx_migrations;")];
        script.extend(schema.dispose_schema().map_err(configuration)?);
        script.extend(schema.create_schema().map_err(configuration)?);

        let mut transaction = self.pool.begin().await?;
        sqlx::raw_sql(&script.join("\n"))
            .execute(&mut *transaction)
            .await?;
        transaction.commit().await?;

        tracing::warn!("clean start: schema dropped and recreated");

        Ok(())
    }

    async fn migrate(&self, migration_path: &Path) -> Result<(), Error> {
        let migrator = Migrator::new(migration_path).await?;
        migrator.run(&self.pool).await?;

        tracing::info!(path = %migration_path.display(), "database migrations applied");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::configs::normalize_path;
    use crate::models::Table;

    use super::*;

    fn memory(clean_start: bool, migration_path: Option<String>) -> Database {
        Database {
            migration_path,
            clean_start,
            url: String::from("sqlite::memory:"),
        }
    }

    async fn table_names(storage: &Storage) -> Vec<String> {
        sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' AND name != '_sqlx_migrations' ORDER BY name",
        )
        .fetch_all(storage.get_pool())
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_clean_start_creates_every_table() {
        let storage = Storage::new(memory(true, None), SchemaManager::default())
            .await
            .unwrap();

        assert_eq!(
            table_names(&storage).await,
            vec![
                "consejos_planta",
                "plantas",
                "registros_sensor",
                "sensores",
                "sensores_plantas"
            ]
        );
    }

    #[tokio::test]
    async fn test_migrations_build_the_same_tables() {
        let migrations = normalize_path("~/migrations")
            .unwrap()
            .to_string_lossy()
            .to_string();

        let storage = Storage::new(memory(false, Some(migrations)), SchemaManager::default())
            .await
            .unwrap();

        assert_eq!(table_names(&storage).await.len(), 5);
    }

    #[tokio::test]
    async fn test_foreign_keys_are_enforced() {
        let storage = Storage::new(memory(true, None), SchemaManager::default())
            .await
            .unwrap();

        let result = sqlx::query(
            "INSERT INTO sensores_plantas (tipo_sensor, zona_sensor, numero_sensor, nombre_planta, fecha_asociacion) VALUES ('HUMEDAD', 'MACETA', 1, 'Aloe', '2024-05-01T00:00:00Z')",
        )
        .execute(storage.get_pool())
        .await;

        assert!(matches!(result, Err(Error::Database(e)) if e.is_foreign_key_violation()));
    }

    #[tokio::test]
    async fn test_unresolved_schema_is_a_configuration_error() {
        struct Huerfana;

        impl Table for Huerfana {
            fn name(&self) -> &'static str {
                "huerfana"
            }

            fn create(&self) -> String {
                String::from("CREATE TABLE huerfana (id INTEGER);")
            }

            fn dispose(&self) -> String {
                String::from("DROP TABLE IF EXISTS huerfana;")
            }

            fn dependencies(&self) -> Vec<&'static str> {
                vec!["macetas"]
            }
        }

        let result = Storage::new(memory(true, None), SchemaManager::new(vec![Box::new(Huerfana)])).await;

        assert!(matches!(result, Err(Error::Configuration(_))));
    }
}
