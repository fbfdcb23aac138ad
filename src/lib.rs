//! Plant Tracker: a plant CRUD REST API over PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod state;
pub mod store;
pub mod telemetry;
pub mod validation;

pub use config::{AppConfig, StoreBackend};
pub use error::{AppError, ConfigError, StoreError};
pub use model::{NewPlant, Plant};
pub use routes::{app_router, common_routes_with_ready, plant_routes};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_plants_table, MemoryPlantStore, PgPlantStore, PlantStore};
