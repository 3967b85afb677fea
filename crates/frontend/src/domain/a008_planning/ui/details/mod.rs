//! Planning details, plus the generated timetable.

mod generator;

use leptos::prelude::*;

use crate::shared::entity_details::{use_route_id, EntityDetailsPage};
use crate::shared::resource::Resource;

pub use generator::PlanningGenerator;

#[component]
#[allow(non_snake_case)]
pub fn PlanningDetails() -> impl IntoView {
    let route_id = use_route_id();

    view! {
        <EntityDetailsPage resource=Resource::Plannings>
            <PlanningGenerator planning_id=route_id />
        </EntityDetailsPage>
    }
}
