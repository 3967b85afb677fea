use contracts::domain::a003_room::aggregate::{Room, RoomDto};
use contracts::domain::common::EntityId;

use crate::shared::components::form_builder::{FieldChange, FieldValue};
use crate::shared::entity_form::EntityForm;
use crate::shared::resource::Resource;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomFormState {
    pub name: String,
}

impl EntityForm for RoomFormState {
    type Record = Room;
    type Dto = RoomDto;

    const RESOURCE: Resource = Resource::Rooms;

    fn from_record(record: &Room) -> Self {
        Self {
            name: record.name.clone(),
        }
    }

    fn apply(&mut self, change: FieldChange) {
        if change.name == "nom" {
            self.name = change.value.text();
        }
    }

    fn value(&self, name: &str) -> FieldValue {
        match name {
            "nom" => FieldValue::Text(self.name.clone()),
            _ => FieldValue::Text(String::new()),
        }
    }

    fn to_dto(&self, id: Option<EntityId>) -> RoomDto {
        RoomDto {
            id,
            name: self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_dto() {
        let mut state = RoomFormState::default();
        state.apply(FieldChange {
            name: "nom".into(),
            value: FieldValue::Text("B12".into()),
        });
        let json = serde_json::to_value(state.to_dto(None)).unwrap();
        assert_eq!(json, serde_json::json!({ "nom": "B12" }));
    }
}
