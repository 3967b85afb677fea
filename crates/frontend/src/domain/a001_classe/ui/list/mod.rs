use contracts::domain::a001_classe::aggregate::Classe;
use contracts::domain::common::Identified;
use leptos::prelude::*;

use crate::shared::components::table::TableRow;
use crate::shared::entity_list::{entity_list_page, ListResource};
use crate::shared::resource::Resource;

impl ListResource for Classe {
    const RESOURCE: Resource = Resource::Classes;

    fn header() -> Vec<String> {
        vec!["Identifiant".into(), "Nom".into(), "Actions".into()]
    }

    fn to_row(&self) -> TableRow {
        TableRow::Actions(vec![self.id_string(), self.name.clone()])
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ClasseList() -> impl IntoView {
    entity_list_page::<Classe>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classe_row() {
        let classe = Classe {
            id: Some(4),
            name: "6eme A".into(),
            ..Default::default()
        };
        assert_eq!(
            classe.to_row(),
            TableRow::Actions(vec!["4".into(), "6eme A".into()])
        );
        assert_eq!(Classe::header().len(), 3);
    }
}
