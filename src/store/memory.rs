//! In-process plant store. Ids start at 1 and are never reused.

use super::{PlantKey, PlantStore};
use crate::error::StoreError;
use crate::model::{NewPlant, Plant};
use crate::validation::name_key;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    last_id: i64,
    plants: BTreeMap<i64, Plant>,
}

impl Inner {
    fn find(&self, key: &PlantKey) -> Option<i64> {
        match key {
            PlantKey::Id(id) => self.plants.contains_key(id).then_some(*id),
            PlantKey::Name(name) => {
                let wanted = name_key(name);
                self.plants
                    .values()
                    .find(|p| name_key(&p.name) == wanted)
                    .map(|p| p.id)
            }
        }
    }

    /// True when a plant other than `except` already holds `name`.
    fn name_taken(&self, name: &str, except: Option<i64>) -> bool {
        let wanted = name_key(name);
        self.plants
            .values()
            .any(|p| Some(p.id) != except && name_key(&p.name) == wanted)
    }

    fn update(&mut self, key: PlantKey, new: NewPlant) -> Result<Plant, StoreError> {
        let id = self
            .find(&key)
            .ok_or_else(|| StoreError::NotFound(key.to_string()))?;
        if self.name_taken(&new.name, Some(id)) {
            return Err(StoreError::DuplicateName(new.name));
        }
        let plant = Plant::from_new(id, new);
        self.plants.insert(id, plant.clone());
        Ok(plant)
    }

    fn delete(&mut self, key: PlantKey) -> Result<(), StoreError> {
        let id = self
            .find(&key)
            .ok_or_else(|| StoreError::NotFound(key.to_string()))?;
        self.plants.remove(&id);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryPlantStore {
    inner: RwLock<Inner>,
}

impl MemoryPlantStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlantStore for MemoryPlantStore {
    async fn create(&self, new: NewPlant) -> Result<Plant, StoreError> {
        let mut inner = self.inner.write().await;
        if inner.name_taken(&new.name, None) {
            return Err(StoreError::DuplicateName(new.name));
        }
        inner.last_id += 1;
        let plant = Plant::from_new(inner.last_id, new);
        inner.plants.insert(plant.id, plant.clone());
        Ok(plant)
    }

    async fn list_all(&self) -> Result<Vec<Plant>, StoreError> {
        Ok(self.inner.read().await.plants.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Plant>, StoreError> {
        Ok(self.inner.read().await.plants.get(&id).cloned())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Plant>, StoreError> {
        let inner = self.inner.read().await;
        let id = inner.find(&PlantKey::Name(name.to_string()));
        Ok(id.and_then(|id| inner.plants.get(&id).cloned()))
    }

    async fn update_by_id(&self, id: i64, new: NewPlant) -> Result<Plant, StoreError> {
        self.inner.write().await.update(PlantKey::Id(id), new)
    }

    async fn update_by_name(&self, name: &str, new: NewPlant) -> Result<Plant, StoreError> {
        self.inner
            .write()
            .await
            .update(PlantKey::Name(name.to_string()), new)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        self.inner.write().await.delete(PlantKey::Id(id))
    }

    async fn delete_by_name(&self, name: &str) -> Result<(), StoreError> {
        self.inner
            .write()
            .await
            .delete(PlantKey::Name(name.to_string()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
