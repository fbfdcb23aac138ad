//! Plant persistence: the `PlantStore` seam and its PostgreSQL and in-memory implementations.
//!
//! Names are unique by [`crate::validation::name_key`]: trimmed and case-insensitive. Lookups by
//! name use the same key, and updates are held to the same rule as creates.

mod memory;
mod postgres;

pub use memory::MemoryPlantStore;
pub use postgres::{ensure_database_exists, ensure_plants_table, PgPlantStore};

use crate::error::StoreError;
use crate::model::{NewPlant, Plant};
use async_trait::async_trait;
use std::fmt;

/// Addresses a single plant, either by id or by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlantKey {
    Id(i64),
    Name(String),
}

impl fmt::Display for PlantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlantKey::Id(id) => write!(f, "id {}", id),
            PlantKey::Name(name) => write!(f, "name '{}'", name),
        }
    }
}

#[async_trait]
pub trait PlantStore: Send + Sync {
    /// Insert a plant and assign its id. Fails with `DuplicateName` if the name is taken.
    async fn create(&self, new: NewPlant) -> Result<Plant, StoreError>;

    /// All plants in id (insertion) order.
    async fn list_all(&self) -> Result<Vec<Plant>, StoreError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Plant>, StoreError>;

    async fn get_by_name(&self, name: &str) -> Result<Option<Plant>, StoreError>;

    /// Replace name, description and watering schedule of the plant with `id`.
    async fn update_by_id(&self, id: i64, new: NewPlant) -> Result<Plant, StoreError>;

    async fn update_by_name(&self, name: &str, new: NewPlant) -> Result<Plant, StoreError>;

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError>;

    async fn delete_by_name(&self, name: &str) -> Result<(), StoreError>;

    /// Cheap liveness probe for readiness checks.
    async fn ping(&self) -> Result<(), StoreError>;
}
