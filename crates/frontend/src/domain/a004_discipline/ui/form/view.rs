use leptos::prelude::*;

use super::state::DisciplineFormState;
use crate::shared::components::form_builder::FieldKind;
use crate::shared::entity_form::entity_form_page;

#[component]
#[allow(non_snake_case)]
pub fn DisciplineForm() -> impl IntoView {
    entity_form_page::<DisciplineFormState, _>(|form| {
        vec![
            form.field(FieldKind::Text, "nom").label("Nom").mandatory(),
            form.field(FieldKind::Text, "description").label("Description"),
            form.field(FieldKind::Text, "volume-horaire")
                .label("Volume horaire"),
            form.field(FieldKind::Text, "couleurFond")
                .label("Couleur du fond"),
            form.field(FieldKind::Text, "couleurPolice")
                .label("Couleur de la police"),
        ]
    })
}
