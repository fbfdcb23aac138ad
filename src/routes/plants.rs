//! Plant CRUD routes, mounted under `/api/v1`.

use crate::handlers::plants::{
    create_plant, delete_plant_by_id, delete_plant_by_name, get_plant_by_id, get_plant_by_name,
    list_plants, update_plant_by_id, update_plant_by_name,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn plant_routes(state: AppState) -> Router {
    Router::new()
        .route("/plants", get(list_plants).post(create_plant))
        .route(
            "/plants/id/:id",
            get(get_plant_by_id)
                .put(update_plant_by_id)
                .delete(delete_plant_by_id),
        )
        .route(
            "/plants/name/:name",
            get(get_plant_by_name)
                .put(update_plant_by_name)
                .delete(delete_plant_by_name),
        )
        .with_state(state)
}
