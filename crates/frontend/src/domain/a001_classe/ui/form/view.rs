use leptos::prelude::*;

use super::state::ClasseFormState;
use crate::shared::components::form_builder::FieldKind;
use crate::shared::entity_form::entity_form_page;

#[component]
#[allow(non_snake_case)]
pub fn ClasseForm() -> impl IntoView {
    entity_form_page::<ClasseFormState, _>(|form| {
        vec![form.field(FieldKind::Text, "nom").label("Nom").mandatory()]
    })
}
