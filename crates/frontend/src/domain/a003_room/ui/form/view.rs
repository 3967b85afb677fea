use leptos::prelude::*;

use super::state::RoomFormState;
use crate::shared::components::form_builder::FieldKind;
use crate::shared::entity_form::entity_form_page;

#[component]
#[allow(non_snake_case)]
pub fn RoomForm() -> impl IntoView {
    entity_form_page::<RoomFormState, _>(|form| {
        vec![form.field(FieldKind::Text, "nom").label("Nom")]
    })
}
