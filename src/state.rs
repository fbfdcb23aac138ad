//! Shared application state for all routes.

use crate::store::PlantStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Injected per router; handlers never reach for a global store.
    pub store: Arc<dyn PlantStore>,
}

impl AppState {
    pub fn new(store: impl PlantStore + 'static) -> Self {
        AppState {
            store: Arc::new(store),
        }
    }
}
