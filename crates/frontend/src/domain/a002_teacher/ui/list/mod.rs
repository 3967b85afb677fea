use contracts::domain::a002_teacher::aggregate::Teacher;
use contracts::domain::common::Identified;
use leptos::prelude::*;

use crate::shared::components::table::TableRow;
use crate::shared::entity_list::{entity_list_page, ListResource};
use crate::shared::resource::Resource;

impl ListResource for Teacher {
    const RESOURCE: Resource = Resource::Teachers;

    fn header() -> Vec<String> {
        ["Identifiant", "Nom", "Prénom", "Actions"]
            .map(String::from)
            .to_vec()
    }

    fn to_row(&self) -> TableRow {
        TableRow::Actions(vec![
            self.id_string(),
            self.last_name.clone(),
            self.first_name.clone(),
        ])
    }
}

#[component]
#[allow(non_snake_case)]
pub fn TeacherList() -> impl IntoView {
    entity_list_page::<Teacher>()
}
