use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityId, Identified};

/// Créneau horaire: start/end pair shared by several slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(default)]
    pub id: Option<EntityId>,

    #[serde(default)]
    pub start: String,

    #[serde(default)]
    pub end: String,
}

impl TimeSlot {
    /// `"08:00-09:00"`
    pub fn range_label(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}

impl Identified for TimeSlot {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSlotDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub start: String,
    pub end: String,
}

impl From<&TimeSlot> for TimeSlotDto {
    fn from(t: &TimeSlot) -> Self {
        Self {
            id: t.id,
            start: t.start.clone(),
            end: t.end.clone(),
        }
    }
}
