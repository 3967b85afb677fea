use leptos::prelude::*;

use super::state::TeacherFormState;
use crate::shared::components::form_builder::FieldKind;
use crate::shared::entity_form::entity_form_page;

#[component]
#[allow(non_snake_case)]
pub fn TeacherForm() -> impl IntoView {
    entity_form_page::<TeacherFormState, _>(|form| {
        vec![
            form.field(FieldKind::Text, "nom").label("Nom").mandatory(),
            form.field(FieldKind::Text, "prenom").label("Prénom"),
        ]
    })
}
