use contracts::domain::a004_discipline::aggregate::Discipline;
use contracts::domain::common::Identified;
use leptos::prelude::*;

use crate::shared::components::table::TableRow;
use crate::shared::entity_list::{entity_list_page, ListResource};
use crate::shared::resource::Resource;

impl ListResource for Discipline {
    const RESOURCE: Resource = Resource::Disciplines;

    fn header() -> Vec<String> {
        vec!["Identifiant".into(), "Nom".into(), "Actions".into()]
    }

    fn to_row(&self) -> TableRow {
        TableRow::Actions(vec![self.id_string(), self.name.clone()])
    }
}

#[component]
#[allow(non_snake_case)]
pub fn DisciplineList() -> impl IntoView {
    entity_list_page::<Discipline>()
}
