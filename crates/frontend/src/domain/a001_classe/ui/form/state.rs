use contracts::domain::a001_classe::aggregate::{Classe, ClasseDto};
use contracts::domain::common::EntityId;

use crate::shared::components::form_builder::{FieldChange, FieldValue};
use crate::shared::entity_form::EntityForm;
use crate::shared::resource::Resource;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClasseFormState {
    pub name: String,
}

impl EntityForm for ClasseFormState {
    type Record = Classe;
    type Dto = ClasseDto;

    const RESOURCE: Resource = Resource::Classes;

    fn from_record(record: &Classe) -> Self {
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

    fn to_dto(&self, id: Option<EntityId>) -> ClasseDto {
        ClasseDto {
            id,
            name: self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_name() {
        let mut state = ClasseFormState::default();
        state.apply(FieldChange {
            name: "nom".into(),
            value: FieldValue::Text("5eme B".into()),
        });
        state.apply(FieldChange {
            name: "unknown".into(),
            value: FieldValue::Text("x".into()),
        });
        assert_eq!(state.value("nom"), FieldValue::Text("5eme B".into()));
        assert_eq!(state.to_dto(None).id, None);
        assert_eq!(state.to_dto(Some(2)).id, Some(2));
    }
}
