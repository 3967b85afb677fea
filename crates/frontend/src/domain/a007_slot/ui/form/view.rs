use contracts::domain::a002_teacher::aggregate::Teacher;
use contracts::domain::a003_room::aggregate::Room;
use contracts::domain::a004_discipline::aggregate::Discipline;
use contracts::domain::a005_time_slot::aggregate::TimeSlot;
use contracts::domain::a006_day::aggregate::Day;
use contracts::domain::common::Identified;
use leptos::prelude::*;

use super::state::SlotFormState;
use crate::shared::components::form_builder::{FieldKind, SelectOption};
use crate::shared::config::use_config;
use crate::shared::entity_form::entity_form_page;
use crate::shared::resource::Resource;

#[component]
#[allow(non_snake_case)]
pub fn SlotForm() -> impl IntoView {
    let days_path = use_config().endpoints.days;

    entity_form_page::<SlotFormState, _>(move |form| {
        let time_slots = form.resource_options::<TimeSlot>(
            Resource::TimeSlots,
            |t| SelectOption::labelled(t.id_string(), t.range_label()),
            Some("timeSlot"),
        );
        let teachers = form.resource_options::<Teacher>(
            Resource::Teachers,
            |t| SelectOption::labelled(t.id_string(), t.full_name()),
            Some("enseignant"),
        );
        let disciplines = form.resource_options::<Discipline>(
            Resource::Disciplines,
            |d| SelectOption::labelled(d.id_string(), d.name.clone()),
            Some("matiere"),
        );
        let rooms = form.resource_options::<Room>(
            Resource::Rooms,
            |r| SelectOption::labelled(r.id_string(), r.name.clone()),
            Some("salle"),
        );
        let days = form.options_at::<Day>(
            &days_path,
            |d| SelectOption::labelled(d.id_string(), d.name.clone()),
            Some("jour"),
        );

        vec![
            form.field(FieldKind::Text, "comment").label("Commentaire"),
            form.field(FieldKind::Text, "couleurFond")
                .label("Couleur du fond"),
            form.field(FieldKind::Text, "couleurPolice")
                .label("Couleur de la police"),
            form.field(FieldKind::Select, "timeSlot")
                .label("Créneau horaire")
                .options(time_slots),
            form.field(FieldKind::Select, "enseignant")
                .label("Enseignant")
                .options(teachers),
            form.field(FieldKind::Select, "matiere")
                .label("Matière")
                .options(disciplines),
            form.field(FieldKind::Select, "salle")
                .label("Salle")
                .options(rooms),
            form.field(FieldKind::Select, "jour")
                .label("Jour")
                .options(days),
        ]
    })
}
