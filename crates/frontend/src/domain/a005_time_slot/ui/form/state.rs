use contracts::domain::a005_time_slot::aggregate::{TimeSlot, TimeSlotDto};
use contracts::domain::common::EntityId;

use crate::shared::components::form_builder::{FieldChange, FieldValue};
use crate::shared::entity_form::EntityForm;
use crate::shared::resource::Resource;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSlotFormState {
    pub start: String,
    pub end: String,
}

impl EntityForm for TimeSlotFormState {
    type Record = TimeSlot;
    type Dto = TimeSlotDto;

    const RESOURCE: Resource = Resource::TimeSlots;

    fn from_record(record: &TimeSlot) -> Self {
        Self {
            start: record.start.clone(),
            end: record.end.clone(),
        }
    }

    fn apply(&mut self, change: FieldChange) {
        match change.name.as_str() {
            "startHour" => self.start = change.value.text(),
            "endHour" => self.end = change.value.text(),
            _ => {}
        }
    }

    fn value(&self, name: &str) -> FieldValue {
        let text = match name {
            "startHour" => self.start.clone(),
            "endHour" => self.end.clone(),
            _ => String::new(),
        };
        FieldValue::Text(text)
    }

    fn to_dto(&self, id: Option<EntityId>) -> TimeSlotDto {
        TimeSlotDto {
            id,
            start: self.start.clone(),
            end: self.end.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours() {
        let mut state = TimeSlotFormState::default();
        state.apply(FieldChange {
            name: "startHour".into(),
            value: FieldValue::Text("08:00".into()),
        });
        state.apply(FieldChange {
            name: "endHour".into(),
            value: FieldValue::Text("09:00".into()),
        });
        let dto = state.to_dto(None);
        assert_eq!((dto.start.as_str(), dto.end.as_str()), ("08:00", "09:00"));
    }
}
