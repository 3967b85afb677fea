use serde::{Deserialize, Serialize};

use crate::domain::a001_classe::aggregate::Classe;
use crate::domain::a007_slot::aggregate::Slot;
use crate::domain::common::{EntityId, EntityRef, Identified};

/// Emploi du temps: a classe, its slots and the weekday usage flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Planning {
    #[serde(default)]
    pub id: Option<EntityId>,

    #[serde(rename = "nom", default)]
    pub name: String,

    #[serde(default)]
    pub classe: Option<Classe>,

    #[serde(default)]
    pub slots: Vec<Slot>,

    #[serde(rename = "wednesdayUsed", default)]
    pub wednesday_used: bool,

    #[serde(rename = "saturdayUsed", default)]
    pub saturday_used: bool,

    #[serde(rename = "creationDate", default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<serde_json::Value>,

    #[serde(rename = "modificationDate", default, skip_serializing_if = "Option::is_none")]
    pub modification_date: Option<serde_json::Value>,
}

impl Identified for Planning {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    #[serde(rename = "nom")]
    pub name: String,

    pub classe: Option<EntityRef>,

    pub slots: Vec<EntityRef>,

    #[serde(rename = "wednesdayUsed")]
    pub wednesday_used: bool,

    #[serde(rename = "saturdayUsed")]
    pub saturday_used: bool,
}

impl Default for PlanningDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            classe: None,
            slots: Vec::new(),
            wednesday_used: true,
            saturday_used: false,
        }
    }
}

/// Result of `GET /planning/generate/{id}`: rendered timetable plus solver warnings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPlanning {
    #[serde(default)]
    pub id: EntityId,

    #[serde(rename = "contentHtml", default)]
    pub content_html: String,

    #[serde(default)]
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planning_record() {
        let planning: Planning = serde_json::from_str(
            r#"{"id":1,"nom":"S1","classe":{"id":4,"nom":"6A"},"slots":[{"id":3},{"id":8}],"wednesdayUsed":false,"saturdayUsed":true}"#,
        )
        .unwrap();
        assert_eq!(planning.classe.as_ref().and_then(|c| c.id), Some(4));
        assert_eq!(planning.slots.len(), 2);
        assert!(!planning.wednesday_used);
        assert!(planning.saturday_used);
    }

    #[test]
    fn test_planning_dto_references() {
        let dto = PlanningDto {
            id: Some(1),
            name: "S1".into(),
            classe: Some(EntityRef::new(4)),
            slots: vec![EntityRef::new(3), EntityRef::new(8)],
            ..Default::default()
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["nom"], "S1");
        assert_eq!(json["classe"]["id"], 4);
        assert_eq!(json["slots"][1]["id"], 8);
        assert_eq!(json["wednesdayUsed"], true);
    }

    #[test]
    fn test_new_planning_defaults() {
        let dto = PlanningDto::default();
        assert!(dto.wednesday_used);
        assert!(!dto.saturday_used);
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_generated_planning() {
        let g: GeneratedPlanning = serde_json::from_str(
            r#"{"id":2,"contentHtml":"<table></table>","warnings":["Slot 4 en conflit"]}"#,
        )
        .unwrap();
        assert_eq!(g.warnings.len(), 1);
        assert_eq!(g.content_html, "<table></table>");
    }
}
