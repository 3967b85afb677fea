use contracts::domain::a008_planning::aggregate::{Planning, PlanningDto};
use contracts::domain::common::{EntityId, EntityRef, Identified};

use crate::shared::components::form_builder::{FieldChange, FieldValue};
use crate::shared::entity_form::EntityForm;
use crate::shared::resource::Resource;

#[derive(Debug, Clone, PartialEq)]
pub struct PlanningFormState {
    pub name: String,
    /// Selected classe id
    pub classe: String,
    /// Selected slot ids
    pub slots: Vec<String>,
    pub wednesday_used: bool,
    pub saturday_used: bool,
}

/// New plannings use Wednesday but not Saturday.
impl Default for PlanningFormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            classe: String::new(),
            slots: Vec::new(),
            wednesday_used: true,
            saturday_used: false,
        }
    }
}

impl EntityForm for PlanningFormState {
    type Record = Planning;
    type Dto = PlanningDto;

    const RESOURCE: Resource = Resource::Plannings;

    fn from_record(record: &Planning) -> Self {
        Self {
            name: record.name.clone(),
            classe: record
                .classe
                .as_ref()
                .map(Identified::id_string)
                .unwrap_or_default(),
            slots: record
                .slots
                .iter()
                .map(Identified::id_string)
                .filter(|id| !id.is_empty())
                .collect(),
            wednesday_used: record.wednesday_used,
            saturday_used: record.saturday_used,
        }
    }

    fn apply(&mut self, change: FieldChange) {
        match change.name.as_str() {
            "nom" => self.name = change.value.text(),
            "classe" => self.classe = change.value.text(),
            "slots" => {
                if let FieldValue::Many(ids) = change.value {
                    self.slots = ids;
                }
            }
            "wednesdayUsed" => self.wednesday_used = change.value.is_checked(),
            "saturdayUsed" => self.saturday_used = change.value.is_checked(),
            _ => {}
        }
    }

    fn value(&self, name: &str) -> FieldValue {
        match name {
            "nom" => FieldValue::Text(self.name.clone()),
            "classe" => FieldValue::Text(self.classe.clone()),
            "slots" => FieldValue::Many(self.slots.clone()),
            "wednesdayUsed" => FieldValue::Checked(self.wednesday_used),
            "saturdayUsed" => FieldValue::Checked(self.saturday_used),
            _ => FieldValue::Text(String::new()),
        }
    }

    fn to_dto(&self, id: Option<EntityId>) -> PlanningDto {
        PlanningDto {
            id,
            name: self.name.clone(),
            classe: EntityRef::parse(&self.classe),
            slots: self.slots.iter().filter_map(|s| EntityRef::parse(s)).collect(),
            wednesday_used: self.wednesday_used,
            saturday_used: self.saturday_used,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_planning_defaults() {
        let state = PlanningFormState::default();
        assert_eq!(state.value("wednesdayUsed"), FieldValue::Checked(true));
        assert_eq!(state.value("saturdayUsed"), FieldValue::Checked(false));
        assert_eq!(state.to_dto(None), PlanningDto::default());
    }

    #[test]
    fn test_slot_selection_and_flags() {
        let mut state = PlanningFormState::default();
        state.apply(FieldChange {
            name: "slots".into(),
            value: FieldValue::Many(vec!["3".into(), "8".into()]),
        });
        state.apply(FieldChange {
            name: "saturdayUsed".into(),
            value: FieldValue::Checked(true),
        });
        state.apply(FieldChange {
            name: "classe".into(),
            value: FieldValue::Text("4".into()),
        });
        let dto = state.to_dto(Some(1));
        assert_eq!(dto.slots, vec![EntityRef::new(3), EntityRef::new(8)]);
        assert_eq!(dto.classe, Some(EntityRef::new(4)));
        assert!(dto.saturday_used);
        assert!(state.value("slots").contains("8"));
    }

    #[test]
    fn test_from_record() {
        let planning: Planning = serde_json::from_str(
            r#"{"id":1,"nom":"S1","classe":{"id":4,"nom":"6A"},"slots":[{"id":3}],"wednesdayUsed":false,"saturdayUsed":true}"#,
        )
        .unwrap();
        let state = PlanningFormState::from_record(&planning);
        assert_eq!(state.classe, "4");
        assert_eq!(state.slots, vec!["3".to_string()]);
        assert!(!state.wednesday_used);
    }
}
