use serde::{Deserialize, Serialize};

use crate::domain::a002_teacher::aggregate::Teacher;
use crate::domain::a003_room::aggregate::Room;
use crate::domain::a004_discipline::aggregate::Discipline;
use crate::domain::a005_time_slot::aggregate::TimeSlot;
use crate::domain::a006_day::aggregate::Day;
use crate::domain::common::{EntityId, EntityRef, Identified};

/// Slot: teacher + room + discipline + time slot + day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    #[serde(default)]
    pub id: Option<EntityId>,

    #[serde(default)]
    pub comment: Option<String>,

    #[serde(rename = "couleurFond", default)]
    pub background_color: Option<String>,

    #[serde(rename = "couleurPolice", default)]
    pub font_color: Option<String>,

    #[serde(rename = "timeSlot", default)]
    pub time_slot: Option<TimeSlot>,

    #[serde(rename = "enseignant", default)]
    pub teacher: Option<Teacher>,

    #[serde(rename = "matiere", default)]
    pub discipline: Option<Discipline>,

    #[serde(rename = "salle", default)]
    pub room: Option<Room>,

    #[serde(rename = "jour", default)]
    pub day: Option<Day>,

    #[serde(rename = "creationDate", default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<serde_json::Value>,

    #[serde(rename = "modificationDate", default, skip_serializing_if = "Option::is_none")]
    pub modification_date: Option<serde_json::Value>,
}

impl Slot {
    /// Human label used by the planning form: `"Lundi 08:00-09:00 Maths (Slot n°3)"`.
    pub fn picker_label(&self) -> String {
        let day = self.day.as_ref().map(|d| d.name.as_str()).unwrap_or("");
        let range = self
            .time_slot
            .as_ref()
            .map(TimeSlot::range_label)
            .unwrap_or_default();
        let discipline = self
            .discipline
            .as_ref()
            .map(|d| d.name.as_str())
            .unwrap_or("");
        let parts: Vec<&str> = [day, range.as_str(), discipline]
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect();
        format!("{} (Slot n°{})", parts.join(" "), self.id_string())
    }
}

impl Identified for Slot {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    pub comment: String,

    #[serde(rename = "couleurFond")]
    pub background_color: String,

    #[serde(rename = "couleurPolice")]
    pub font_color: String,

    #[serde(rename = "timeSlot")]
    pub time_slot: Option<EntityRef>,

    #[serde(rename = "enseignant")]
    pub teacher: Option<EntityRef>,

    #[serde(rename = "matiere")]
    pub discipline: Option<EntityRef>,

    #[serde(rename = "salle")]
    pub room: Option<EntityRef>,

    #[serde(rename = "jour")]
    pub day: Option<EntityRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLOT_JSON: &str = r##"{
        "id": 3,
        "comment": null,
        "couleurFond": "#fff",
        "couleurPolice": "#000",
        "timeSlot": { "id": 1, "start": "08:00", "end": "09:00" },
        "enseignant": { "id": 2, "nom": "Curie", "prenom": "Marie" },
        "matiere": { "id": 5, "nom": "Physique" },
        "salle": { "id": 9, "nom": "B12" },
        "jour": { "id": 1, "nom": "Lundi" },
        "plannings": []
    }"##;

    #[test]
    fn test_slot_nested_records() {
        let slot: Slot = serde_json::from_str(SLOT_JSON).unwrap();
        assert_eq!(slot.discipline.as_ref().unwrap().name, "Physique");
        assert_eq!(slot.time_slot.as_ref().unwrap().start, "08:00");
        assert_eq!(slot.picker_label(), "Lundi 08:00-09:00 Physique (Slot n°3)");
    }

    #[test]
    fn test_slot_dto_references() {
        let dto = SlotDto {
            id: Some(3),
            background_color: "#fff".into(),
            teacher: Some(EntityRef::new(2)),
            room: Some(EntityRef::new(9)),
            ..Default::default()
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["enseignant"]["id"], 2);
        assert_eq!(json["salle"]["id"], 9);
        assert_eq!(json["couleurFond"], "#fff");
        assert_eq!(json["id"], 3);
        assert!(json["jour"].is_null());
    }
}
