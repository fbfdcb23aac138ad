//! PostgreSQL plant store and table bootstrap.

use super::{PlantKey, PlantStore};
use crate::error::StoreError;
use crate::model::{NewPlant, Plant};
use crate::validation::name_key;
use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

const PLANTS_TABLE: &str = "plants";

const PLANT_COLUMNS: &str = "id, name, description, watering_schedule";

/// Create the plants table if it does not exist.
///
/// `name_key` holds [`name_key`] computed in Rust, so uniqueness and lookups follow exactly the
/// same folding as the in-memory store instead of the database locale's `lower()`.
pub async fn ensure_plants_table(pool: &PgPool) -> Result<(), StoreError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            name_key TEXT NOT NULL UNIQUE,
            description TEXT NOT NULL,
            watering_schedule TEXT NOT NULL
        )
        "#,
        PLANTS_TABLE
    );
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}

/// Create the database named in `database_url` when it is missing, by way of the server's
/// `postgres` maintenance database. A URL without a database name, or naming `postgres`
/// itself, needs nothing.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), StoreError> {
    let target = PgConnectOptions::from_str(database_url)?;
    let Some(db_name) = database_to_create(&target) else {
        return Ok(());
    };
    let mut conn = target.database("postgres").connect().await?;
    let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn database_to_create(opts: &PgConnectOptions) -> Option<String> {
    opts.get_database()
        .map(str::trim)
        .filter(|name| !name.is_empty() && *name != "postgres")
        .map(String::from)
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// WHERE clause for a key, using placeholder `$n`. Name keys are bound already folded.
fn key_predicate(key: &PlantKey, n: usize) -> String {
    match key {
        PlantKey::Id(_) => format!("id = ${}", n),
        PlantKey::Name(_) => format!("name_key = ${}", n),
    }
}

/// Unique-index violations become `DuplicateName`; everything else stays a database error.
fn map_write_error(e: sqlx::Error, name: &str) -> StoreError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::DuplicateName(name.to_string()),
        _ => StoreError::Db(e),
    }
}

#[derive(Clone)]
pub struct PgPlantStore {
    pool: PgPool,
}

impl PgPlantStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_by_key(&self, key: &PlantKey) -> Result<Option<Plant>, StoreError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE {}",
            PLANT_COLUMNS,
            PLANTS_TABLE,
            key_predicate(key, 1)
        );
        tracing::debug!(sql = %sql, key = %key, "query");
        let query = sqlx::query_as::<_, Plant>(&sql);
        let query = match key {
            PlantKey::Id(id) => query.bind(*id),
            PlantKey::Name(name) => query.bind(name_key(name)),
        };
        Ok(query.fetch_optional(&self.pool).await?)
    }

    async fn update_by_key(&self, key: PlantKey, new: NewPlant) -> Result<Plant, StoreError> {
        let sql = format!(
            "UPDATE {} SET name = $1, name_key = $2, description = $3, watering_schedule = $4 WHERE {} RETURNING {}",
            PLANTS_TABLE,
            key_predicate(&key, 5),
            PLANT_COLUMNS
        );
        tracing::debug!(sql = %sql, key = %key, "query");
        let query = sqlx::query_as::<_, Plant>(&sql)
            .bind(&new.name)
            .bind(name_key(&new.name))
            .bind(&new.description)
            .bind(&new.watering_schedule);
        let query = match &key {
            PlantKey::Id(id) => query.bind(*id),
            PlantKey::Name(name) => query.bind(name_key(name)),
        };
        query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_write_error(e, &new.name))?
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    async fn delete_by_key(&self, key: PlantKey) -> Result<(), StoreError> {
        let sql = format!("DELETE FROM {} WHERE {}", PLANTS_TABLE, key_predicate(&key, 1));
        tracing::debug!(sql = %sql, key = %key, "query");
        let query = sqlx::query(&sql);
        let query = match &key {
            PlantKey::Id(id) => query.bind(*id),
            PlantKey::Name(name) => query.bind(name_key(name)),
        };
        let result = query.execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(key.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl PlantStore for PgPlantStore {
    async fn create(&self, new: NewPlant) -> Result<Plant, StoreError> {
        let sql = format!(
            "INSERT INTO {} (name, name_key, description, watering_schedule) VALUES ($1, $2, $3, $4) RETURNING {}",
            PLANTS_TABLE, PLANT_COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        sqlx::query_as::<_, Plant>(&sql)
            .bind(&new.name)
            .bind(name_key(&new.name))
            .bind(&new.description)
            .bind(&new.watering_schedule)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_write_error(e, &new.name))
    }

    async fn list_all(&self) -> Result<Vec<Plant>, StoreError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", PLANT_COLUMNS, PLANTS_TABLE);
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Plant>(&sql).fetch_all(&self.pool).await?)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Plant>, StoreError> {
        self.fetch_by_key(&PlantKey::Id(id)).await
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Plant>, StoreError> {
        self.fetch_by_key(&PlantKey::Name(name.to_string())).await
    }

    async fn update_by_id(&self, id: i64, new: NewPlant) -> Result<Plant, StoreError> {
        self.update_by_key(PlantKey::Id(id), new).await
    }

    async fn update_by_name(&self, name: &str, new: NewPlant) -> Result<Plant, StoreError> {
        self.update_by_key(PlantKey::Name(name.to_string()), new).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        self.delete_by_key(PlantKey::Id(id)).await
    }

    async fn delete_by_name(&self, name: &str) -> Result<(), StoreError> {
        self.delete_by_key(PlantKey::Name(name.to_string())).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(url: &str) -> PgConnectOptions {
        PgConnectOptions::from_str(url).expect("valid url")
    }

    #[test]
    fn creates_only_named_non_maintenance_databases() {
        assert_eq!(
            database_to_create(&options("postgres://u:p@db:5432/plants?sslmode=disable")),
            Some("plants".to_string())
        );
        assert_eq!(database_to_create(&options("postgres://u:p@db:5432/postgres")), None);
    }

    #[test]
    fn key_predicates_use_requested_placeholder() {
        assert_eq!(key_predicate(&PlantKey::Id(3), 5), "id = $5");
        assert_eq!(key_predicate(&PlantKey::Name("Fern".into()), 1), "name_key = $1");
    }

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_ident(r#"my"db"#), r#""my""db""#);
    }
}
