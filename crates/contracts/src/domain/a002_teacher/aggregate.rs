use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityId, Identified};

/// Enseignant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    #[serde(default)]
    pub id: Option<EntityId>,

    #[serde(rename = "nom", default)]
    pub last_name: String,

    #[serde(rename = "prenom", default)]
    pub first_name: String,

    #[serde(rename = "creationDate", default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<serde_json::Value>,

    #[serde(rename = "modificationDate", default, skip_serializing_if = "Option::is_none")]
    pub modification_date: Option<serde_json::Value>,
}

impl Teacher {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

impl Identified for Teacher {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeacherDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    #[serde(rename = "nom")]
    pub last_name: String,

    #[serde(rename = "prenom")]
    pub first_name: String,
}

impl From<&Teacher> for TeacherDto {
    fn from(t: &Teacher) -> Self {
        Self {
            id: t.id,
            last_name: t.last_name.clone(),
            first_name: t.first_name.clone(),
        }
    }
}
