use contracts::domain::a004_discipline::aggregate::{Discipline, DisciplineDto};
use contracts::domain::common::EntityId;

use crate::shared::components::form_builder::{FieldChange, FieldValue};
use crate::shared::entity_form::EntityForm;
use crate::shared::resource::Resource;

/// `description` and `volume-horaire` fill `descriptionMatiere` and
/// `volumeHoraire`; the colour fields keep their wire names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisciplineFormState {
    pub name: String,
    pub description: String,
    pub hours: String,
    pub background_color: String,
    pub font_color: String,
}

impl EntityForm for DisciplineFormState {
    type Record = Discipline;
    type Dto = DisciplineDto;

    const RESOURCE: Resource = Resource::Disciplines;

    fn from_record(record: &Discipline) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone().unwrap_or_default(),
            hours: record.hours.clone().unwrap_or_default(),
            background_color: record.background_color.clone().unwrap_or_default(),
            font_color: record.font_color.clone().unwrap_or_default(),
        }
    }

    fn apply(&mut self, change: FieldChange) {
        let text = change.value.text();
        match change.name.as_str() {
            "nom" => self.name = text,
            "description" => self.description = text,
            "volume-horaire" => self.hours = text,
            "couleurFond" => self.background_color = text,
            "couleurPolice" => self.font_color = text,
            _ => {}
        }
    }

    fn value(&self, name: &str) -> FieldValue {
        let text = match name {
            "nom" => &self.name,
            "description" => &self.description,
            "volume-horaire" => &self.hours,
            "couleurFond" => &self.background_color,
            "couleurPolice" => &self.font_color,
            _ => return FieldValue::Text(String::new()),
        };
        FieldValue::Text(text.clone())
    }

    fn to_dto(&self, id: Option<EntityId>) -> DisciplineDto {
        DisciplineDto {
            id,
            name: self.name.clone(),
            description: self.description.clone(),
            hours: self.hours.clone(),
            background_color: self.background_color.clone(),
            font_color: self.font_color.clone(),
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
    fn test_hours_field_maps_to_volume_horaire() {
        let mut state = DisciplineFormState::default();
        state.apply(change("nom", "Physique"));
        state.apply(change("volume-horaire", "12:00"));
        let json = serde_json::to_value(state.to_dto(Some(5))).unwrap();
        assert_eq!(json["volumeHoraire"], "12:00");
        assert_eq!(json["nom"], "Physique");
        assert_eq!(json["id"], 5);
    }

    #[test]
    fn test_record_without_optional_fields() {
        let record: Discipline = serde_json::from_str(r#"{"id":5,"nom":"Physique"}"#).unwrap();
        let state = DisciplineFormState::from_record(&record);
        assert_eq!(state.value("description"), FieldValue::Text(String::new()));
    }
}
