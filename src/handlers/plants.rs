//! Plant CRUD handlers: list, create, and read/update/delete by id or by name.

use crate::error::{AppError, StoreError};
use crate::extractors::PlantPayload;
use crate::model::Plant;
use crate::state::AppState;
use crate::store::PlantKey;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid plant id: '{}'", id_str)))
}

pub async fn list_plants(State(state): State<AppState>) -> Result<Json<Vec<Plant>>, AppError> {
    let plants = state.store.list_all().await?;
    tracing::debug!(count = plants.len(), "listed plants");
    Ok(Json(plants))
}

pub async fn create_plant(
    State(state): State<AppState>,
    PlantPayload(body): PlantPayload,
) -> Result<Json<Plant>, AppError> {
    let plant = state.store.create(body).await?;
    tracing::info!(id = plant.id, name = %plant.name, "plant created");
    Ok(Json(plant))
}

pub async fn get_plant_by_id(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Plant>, AppError> {
    let id = parse_id(&id_str)?;
    let plant = state
        .store
        .get_by_id(id)
        .await?
        .ok_or_else(|| StoreError::NotFound(PlantKey::Id(id).to_string()))?;
    Ok(Json(plant))
}

pub async fn get_plant_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Plant>, AppError> {
    let plant = state
        .store
        .get_by_name(&name)
        .await?
        .ok_or_else(|| StoreError::NotFound(PlantKey::Name(name.clone()).to_string()))?;
    Ok(Json(plant))
}

pub async fn update_plant_by_id(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    PlantPayload(body): PlantPayload,
) -> Result<Json<Plant>, AppError> {
    let id = parse_id(&id_str)?;
    let plant = state.store.update_by_id(id, body).await?;
    tracing::info!(id = plant.id, name = %plant.name, "plant updated");
    Ok(Json(plant))
}

pub async fn update_plant_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
    PlantPayload(body): PlantPayload,
) -> Result<Json<Plant>, AppError> {
    let plant = state.store.update_by_name(&name, body).await?;
    tracing::info!(id = plant.id, previous_name = %name, name = %plant.name, "plant updated");
    Ok(Json(plant))
}

pub async fn delete_plant_by_id(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id_str)?;
    state.store.delete_by_id(id).await?;
    tracing::info!(id, "plant deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_plant_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, AppError> {
    state.store.delete_by_name(&name).await?;
    tracing::info!(name = %name, "plant deleted");
    Ok(StatusCode::NO_CONTENT)
}
