use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityId, Identified};

/// Salle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(default)]
    pub id: Option<EntityId>,

    #[serde(rename = "nom", default)]
    pub name: String,

    #[serde(rename = "creationDate", default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<serde_json::Value>,

    #[serde(rename = "modificationDate", default, skip_serializing_if = "Option::is_none")]
    pub modification_date: Option<serde_json::Value>,
}

impl Identified for Room {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    #[serde(rename = "nom")]
    pub name: String,
}

impl From<&Room> for RoomDto {
    fn from(r: &Room) -> Self {
        Self {
            id: r.id,
            name: r.name.clone(),
        }
    }
}
