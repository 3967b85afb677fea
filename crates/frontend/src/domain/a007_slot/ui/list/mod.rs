use contracts::domain::a007_slot::aggregate::Slot;
use contracts::domain::common::Identified;
use leptos::prelude::*;

use crate::shared::components::table::TableRow;
use crate::shared::entity_list::{entity_list_page, ListResource};
use crate::shared::resource::Resource;

impl ListResource for Slot {
    const RESOURCE: Resource = Resource::Slots;

    fn header() -> Vec<String> {
        ["Identifiant", "Matière", "Début", "Fin", "Actions"]
            .map(String::from)
            .to_vec()
    }

    fn to_row(&self) -> TableRow {
        let discipline = self
            .discipline
            .as_ref()
            .map(|d| d.name.clone())
            .unwrap_or_default();
        let (start, end) = self
            .time_slot
            .as_ref()
            .map(|t| (t.start.clone(), t.end.clone()))
            .unwrap_or_default();
        TableRow::Actions(vec![self.id_string(), discipline, start, end])
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SlotList() -> impl IntoView {
    entity_list_page::<Slot>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_row_with_missing_references() {
        let slot: Slot = serde_json::from_str(r#"{"id":3,"matiere":{"id":5,"nom":"Physique"}}"#)
            .unwrap();
        assert_eq!(
            slot.to_row().cells(),
            &["3".to_string(), "Physique".into(), String::new(), String::new()]
        );
    }
}
