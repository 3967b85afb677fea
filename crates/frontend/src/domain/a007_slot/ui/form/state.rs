use contracts::domain::a007_slot::aggregate::{Slot, SlotDto};
use contracts::domain::common::{EntityId, EntityRef, Identified};

use crate::shared::components::form_builder::{FieldChange, FieldValue};
use crate::shared::entity_form::EntityForm;
use crate::shared::resource::Resource;

/// References are kept as the selected option values (record ids).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotFormState {
    pub comment: String,
    pub background_color: String,
    pub font_color: String,
    pub time_slot: String,
    pub teacher: String,
    pub discipline: String,
    pub room: String,
    pub day: String,
}

fn id_of<T: Identified>(record: &Option<T>) -> String {
    record.as_ref().map(Identified::id_string).unwrap_or_default()
}

impl SlotFormState {
    fn field(&self, name: &str) -> Option<&String> {
        match name {
            "comment" => Some(&self.comment),
            "couleurFond" => Some(&self.background_color),
            "couleurPolice" => Some(&self.font_color),
            "timeSlot" => Some(&self.time_slot),
            "enseignant" => Some(&self.teacher),
            "matiere" => Some(&self.discipline),
            "salle" => Some(&self.room),
            "jour" => Some(&self.day),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "comment" => Some(&mut self.comment),
            "couleurFond" => Some(&mut self.background_color),
            "couleurPolice" => Some(&mut self.font_color),
            "timeSlot" => Some(&mut self.time_slot),
            "enseignant" => Some(&mut self.teacher),
            "matiere" => Some(&mut self.discipline),
            "salle" => Some(&mut self.room),
            "jour" => Some(&mut self.day),
            _ => None,
        }
    }
}

impl EntityForm for SlotFormState {
    type Record = Slot;
    type Dto = SlotDto;

    const RESOURCE: Resource = Resource::Slots;

    fn from_record(record: &Slot) -> Self {
        Self {
            comment: record.comment.clone().unwrap_or_default(),
            background_color: record.background_color.clone().unwrap_or_default(),
            font_color: record.font_color.clone().unwrap_or_default(),
            time_slot: id_of(&record.time_slot),
            teacher: id_of(&record.teacher),
            discipline: id_of(&record.discipline),
            room: id_of(&record.room),
            day: id_of(&record.day),
        }
    }

    fn apply(&mut self, change: FieldChange) {
        if let Some(field) = self.field_mut(&change.name) {
            *field = change.value.text();
        }
    }

    fn value(&self, name: &str) -> FieldValue {
        FieldValue::Text(self.field(name).cloned().unwrap_or_default())
    }

    fn to_dto(&self, id: Option<EntityId>) -> SlotDto {
        SlotDto {
            id,
            comment: self.comment.clone(),
            background_color: self.background_color.clone(),
            font_color: self.font_color.clone(),
            time_slot: EntityRef::parse(&self.time_slot),
            teacher: EntityRef::parse(&self.teacher),
            discipline: EntityRef::parse(&self.discipline),
            room: EntityRef::parse(&self.room),
            day: EntityRef::parse(&self.day),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(name: &str, value: &str) -> FieldChange {
        FieldChange {
            name: name.into(),
            value: FieldValue::Text(value.into()),
        }
    }

    #[test]
    fn test_references_from_record() {
        let slot: Slot = serde_json::from_str(
            r#"{"id":3,"timeSlot":{"id":1,"start":"08:00","end":"09:00"},"salle":{"id":9,"nom":"B12"}}"#,
        )
        .unwrap();
        let state = SlotFormState::from_record(&slot);
        assert_eq!(state.value("timeSlot"), FieldValue::Text("1".into()));
        assert_eq!(state.value("salle"), FieldValue::Text("9".into()));
        assert_eq!(state.value("enseignant"), FieldValue::Text(String::new()));
    }

    #[test]
    fn test_unselected_reference_is_null() {
        let mut state = SlotFormState::default();
        state.apply(change("matiere", "5"));
        state.apply(change("comment", "TP"));
        let dto = state.to_dto(None);
        assert_eq!(dto.discipline, Some(EntityRef::new(5)));
        assert_eq!(dto.teacher, None);
        assert_eq!(dto.comment, "TP");
    }
}
