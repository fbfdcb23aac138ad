//! Plant shapes: the request body (no id) and the stored record (with id).

use serde::{Deserialize, Serialize};

/// A stored plant, as returned by every read and write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Plant {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub watering_schedule: String,
}

/// Create and full-replace update payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPlant {
    pub name: String,
    pub description: String,
    pub watering_schedule: String,
}

impl NewPlant {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        watering_schedule: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            watering_schedule: watering_schedule.into(),
        }
    }
}

impl Plant {
    /// The only conversion between the two shapes; the store supplies the id.
    pub fn from_new(id: i64, new: NewPlant) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            watering_schedule: new.watering_schedule,
        }
    }
}
