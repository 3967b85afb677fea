use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityId, Identified};

/// Jour de la semaine, read-only reference data served by `/jours`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Day {
    #[serde(default)]
    pub id: Option<EntityId>,

    #[serde(rename = "nom", default)]
    pub name: String,
}

impl Identified for Day {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}
