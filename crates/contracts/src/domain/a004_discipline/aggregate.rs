use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityId, Identified};

/// Matière: a subject with its colours and allotted hours.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Discipline {
    #[serde(default)]
    pub id: Option<EntityId>,

    #[serde(rename = "nom", default)]
    pub name: String,

    #[serde(rename = "couleurFond", default)]
    pub background_color: Option<String>,

    #[serde(rename = "couleurPolice", default)]
    pub font_color: Option<String>,

    /// Allotted hours, e.g. `"12:00"`
    #[serde(rename = "volumeHoraire", default)]
    pub hours: Option<String>,

    #[serde(rename = "descriptionMatiere", default)]
    pub description: Option<String>,
}

impl Identified for Discipline {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisciplineDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    #[serde(rename = "nom")]
    pub name: String,

    #[serde(rename = "descriptionMatiere")]
    pub description: String,

    #[serde(rename = "volumeHoraire")]
    pub hours: String,

    #[serde(rename = "couleurFond")]
    pub background_color: String,

    #[serde(rename = "couleurPolice")]
    pub font_color: String,
}

impl From<&Discipline> for DisciplineDto {
    fn from(d: &Discipline) -> Self {
        Self {
            id: d.id,
            name: d.name.clone(),
            description: d.description.clone().unwrap_or_default(),
            hours: d.hours.clone().unwrap_or_default(),
            background_color: d.background_color.clone().unwrap_or_default(),
            font_color: d.font_color.clone().unwrap_or_default(),
        }
    }
}
