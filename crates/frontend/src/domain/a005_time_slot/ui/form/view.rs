use leptos::prelude::*;

use super::state::TimeSlotFormState;
use crate::shared::components::form_builder::FieldKind;
use crate::shared::entity_form::entity_form_page;

#[component]
#[allow(non_snake_case)]
pub fn TimeSlotForm() -> impl IntoView {
    entity_form_page::<TimeSlotFormState, _>(|form| {
        vec![
            form.field(FieldKind::Text, "startHour")
                .label("Début du créneau horaire")
                .mandatory(),
            form.field(FieldKind::Text, "endHour")
                .label("Fin du créneau horaire")
                .mandatory(),
        ]
    })
}
