use contracts::domain::a001_classe::aggregate::Classe;
use contracts::domain::a007_slot::aggregate::Slot;
use contracts::domain::common::Identified;
use leptos::prelude::*;

use super::state::PlanningFormState;
use crate::shared::components::form_builder::{FieldKind, SelectOption};
use crate::shared::entity_form::entity_form_page;
use crate::shared::resource::Resource;

#[component]
#[allow(non_snake_case)]
pub fn PlanningForm() -> impl IntoView {
    entity_form_page::<PlanningFormState, _>(|form| {
        let classes = form.resource_options::<Classe>(
            Resource::Classes,
            |c| SelectOption::labelled(c.id_string(), c.name.clone()),
            Some("classe"),
        );
        let slots = form.resource_options::<Slot>(
            Resource::Slots,
            |s| SelectOption::labelled(s.id_string(), s.picker_label()),
            None,
        );

        vec![
            form.field(FieldKind::Text, "nom").label("Nom").mandatory(),
            form.field(FieldKind::Select, "classe")
                .label("Sélectionnez une classe")
                .options(classes),
            form.field(FieldKind::Select, "slots")
                .label("Sélectionnez un ou plusieurs slots")
                .multiple()
                .options(slots),
            form.field(FieldKind::Checkbox, "wednesdayUsed")
                .label("Activer le mercredi ?"),
            form.field(FieldKind::Checkbox, "saturdayUsed")
                .label("Activer le samedi ?"),
        ]
    })
}
