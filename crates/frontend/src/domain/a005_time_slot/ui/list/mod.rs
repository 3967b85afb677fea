use contracts::domain::a005_time_slot::aggregate::TimeSlot;
use contracts::domain::common::Identified;
use leptos::prelude::*;

use crate::shared::components::table::TableRow;
use crate::shared::entity_list::{entity_list_page, ListResource};
use crate::shared::resource::Resource;

impl ListResource for TimeSlot {
    const RESOURCE: Resource = Resource::TimeSlots;

    fn header() -> Vec<String> {
        ["Identifiant", "Début", "Fin", "Actions"]
            .map(String::from)
            .to_vec()
    }

    fn to_row(&self) -> TableRow {
        TableRow::Actions(vec![self.id_string(), self.start.clone(), self.end.clone()])
    }
}

#[component]
#[allow(non_snake_case)]
pub fn TimeSlotList() -> impl IntoView {
    entity_list_page::<TimeSlot>()
}
