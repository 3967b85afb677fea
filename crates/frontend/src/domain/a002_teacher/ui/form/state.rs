use contracts::domain::a002_teacher::aggregate::{Teacher, TeacherDto};
use contracts::domain::common::EntityId;

use crate::shared::components::form_builder::{FieldChange, FieldValue};
use crate::shared::entity_form::EntityForm;
use crate::shared::resource::Resource;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeacherFormState {
    pub last_name: String,
    pub first_name: String,
}

impl EntityForm for TeacherFormState {
    type Record = Teacher;
    type Dto = TeacherDto;

    const RESOURCE: Resource = Resource::Teachers;

    fn from_record(record: &Teacher) -> Self {
        Self {
            last_name: record.last_name.clone(),
            first_name: record.first_name.clone(),
        }
    }

    fn apply(&mut self, change: FieldChange) {
        match change.name.as_str() {
            "nom" => self.last_name = change.value.text(),
            "prenom" => self.first_name = change.value.text(),
            _ => {}
        }
    }

    fn value(&self, name: &str) -> FieldValue {
        let text = match name {
            "nom" => self.last_name.clone(),
            "prenom" => self.first_name.clone(),
            _ => String::new(),
        };
        FieldValue::Text(text)
    }

    fn to_dto(&self, id: Option<EntityId>) -> TeacherDto {
        TeacherDto {
            id,
            last_name: self.last_name.clone(),
            first_name: self.first_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_names() {
        let mut state = TeacherFormState::from_record(&Teacher {
            id: Some(1),
            last_name: "Curie".into(),
            first_name: "Pierre".into(),
            ..Default::default()
        });
        state.apply(FieldChange {
            name: "prenom".into(),
            value: FieldValue::Text("Marie".into()),
        });
        let dto = state.to_dto(Some(1));
        assert_eq!(dto.last_name, "Curie");
        assert_eq!(dto.first_name, "Marie");
    }
}
